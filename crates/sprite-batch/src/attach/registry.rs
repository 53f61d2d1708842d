use std::sync::Arc;

use crate::primitive::{Primitive, PrimitiveBuffer};
use crate::scene::{AttachmentDriver, Sprite};

use super::AttachmentSlot;

/// Override sprite remembered across a detach, keyed by the driver's path hash.
#[derive(Debug, Clone)]
struct SavedOverride {
    path_hash: i32,
    sprite: Arc<Sprite>,
}

/// Active/free partition of attachment slots and their primitives.
///
/// Invariants:
/// - `active <= capacity`, and capacity only grows
/// - slot `i` and primitive `i` belong together; swaps move both
/// - every active slot's `id` equals its index
/// - there is always at least one free slot after an attach returns
#[derive(Debug)]
pub struct AttachmentRegistry {
    slots: Vec<AttachmentSlot>,
    primitives: PrimitiveBuffer,
    active: usize,
    owner_id: u32,
    overrides: Vec<SavedOverride>,
}

impl AttachmentRegistry {
    /// Creates a registry with room for `capacity` attachments (at least one).
    pub fn new(capacity: usize, owner_id: u32) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: (0..capacity).map(|_| AttachmentSlot::new()).collect(),
            primitives: PrimitiveBuffer::new(capacity, owner_id),
            active: 0,
            owner_id,
            overrides: Vec::new(),
        }
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.active
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn owner_id(&self) -> u32 {
        self.owner_id
    }

    /// Re-tags every primitive with a new owner.
    pub fn set_owner_id(&mut self, owner_id: u32) {
        self.owner_id = owner_id;
        self.primitives.set_owner(owner_id);
    }

    /// Takes the next free slot, optionally linked to `driver`, and returns its id.
    ///
    /// The slot's transform is reset. If an override sprite was saved for the
    /// driver's path on an earlier detach, it is restored and forgotten.
    /// Grows the registry when the last free slot is taken.
    pub fn attach(&mut self, driver: Option<Arc<dyn AttachmentDriver>>) -> usize {
        let idx = self.active;
        self.active += 1;

        let slot = &mut self.slots[idx];
        slot.id = idx;
        slot.reset_transform();

        if let Some(driver) = driver {
            let hash = driver.path_hash();
            slot.link_driver(driver);

            if let Some(pos) = self.overrides.iter().position(|o| o.path_hash == hash) {
                let saved = self.overrides.remove(pos);
                log::debug!("restoring override sprite '{}' on slot {idx}", saved.sprite.name);
                slot.set_override_sprite(Some(saved.sprite));
            }
        }

        if self.active == self.capacity() {
            self.resize(self.active + 1);
        }

        log::trace!("attach: slot {idx} ({} active)", self.active);
        idx
    }

    /// Attaches `sprite` with no driver and returns its slot id.
    pub fn attach_sprite(&mut self, sprite: Arc<Sprite>) -> usize {
        let idx = self.attach(None);
        self.slots[idx].set_sprite(Some(sprite));
        idx
    }

    /// Detaches slot `idx` by swapping the last active slot into its place.
    ///
    /// The detached slot is fully cleared. Ids of all other slots are unchanged
    /// except the previously-last one, which now has id `idx`.
    pub fn detach(&mut self, idx: usize) {
        debug_assert!(idx < self.active, "detach({idx}) outside active region 0..{}", self.active);
        if idx >= self.active {
            return;
        }

        let last = self.active - 1;

        let slot = &mut self.slots[idx];
        if let (Some(sprite), Some(driver)) = (slot.override_sprite(), slot.driver()) {
            self.overrides.push(SavedOverride {
                path_hash: driver.path_hash(),
                sprite: Arc::clone(sprite),
            });
        }
        slot.clear_links();
        self.primitives.get_mut(idx).visible = false;

        if idx != last {
            self.slots.swap(idx, last);
            self.primitives.swap(idx, last);
            self.slots[idx].id = idx;
            self.slots[last].id = last;
        }

        self.active -= 1;
        log::trace!("detach: slot {idx} ({} active)", self.active);
    }

    /// Grows to at least `min_capacity * 2` slots if capacity is below `min_capacity`.
    pub fn resize(&mut self, min_capacity: usize) {
        let old = self.capacity();
        if old >= min_capacity {
            return;
        }

        let new = min_capacity * 2;
        self.slots.reserve_exact(new - old);
        self.slots.extend((old..new).map(|_| AttachmentSlot::new()));
        self.primitives.grow_to(new, self.owner_id);

        log::debug!("attachment registry grew {old} -> {new}");
    }

    /// Resets every slot, forgets saved overrides and zeroes the active count.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.clear_links();
        }
        for pri in self.primitives.active_mut(self.slots.len()) {
            pri.release_texture();
            pri.visible = false;
        }
        self.overrides.clear();
        self.active = 0;
    }

    /// First active slot matching `name`.
    ///
    /// A query containing `/` is compared against driver full paths; otherwise
    /// against slot names.
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        let is_path = name.contains('/');
        self.active_slots().iter().position(|slot| {
            if is_path {
                slot.driver().is_some_and(|d| d.full_path() == name)
            } else {
                slot.name == name
            }
        })
    }

    /// First active slot whose search hash equals `hash`.
    pub fn find_by_path_hash(&self, hash: i32) -> Option<usize> {
        self.active_slots()
            .iter()
            .position(|slot| slot.search_hash() == hash)
    }

    #[inline]
    pub fn slot(&self, idx: usize) -> &AttachmentSlot {
        debug_assert!(idx < self.active, "slot({idx}) outside active region 0..{}", self.active);
        &self.slots[idx]
    }

    #[inline]
    pub fn slot_mut(&mut self, idx: usize) -> &mut AttachmentSlot {
        debug_assert!(idx < self.active, "slot_mut({idx}) outside active region 0..{}", self.active);
        &mut self.slots[idx]
    }

    #[inline]
    pub fn active_slots(&self) -> &[AttachmentSlot] {
        &self.slots[..self.active]
    }

    #[inline]
    pub fn primitives(&self) -> &PrimitiveBuffer {
        &self.primitives
    }

    #[inline]
    pub fn primitives_mut(&mut self) -> &mut PrimitiveBuffer {
        &mut self.primitives
    }

    /// Active primitives.
    #[inline]
    pub fn active_primitives(&self) -> &[Primitive] {
        self.primitives.active(self.active)
    }

    /// Active slots and their primitives, borrowed together.
    #[inline]
    pub fn active_parts_mut(&mut self) -> (&mut [AttachmentSlot], &mut [Primitive]) {
        let active = self.active;
        (&mut self.slots[..active], self.primitives.active_mut(active))
    }

    /// Number of saved override sprites waiting for their driver to re-attach.
    #[inline]
    pub fn saved_override_count(&self) -> usize {
        self.overrides.len()
    }
}
