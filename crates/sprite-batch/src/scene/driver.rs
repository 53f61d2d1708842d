use std::fmt;

/// External object driving an attachment, typically an animation track.
///
/// Drivers are shared (`Arc<dyn AttachmentDriver>`) and only ever read.
pub trait AttachmentDriver: fmt::Debug {
    /// Short name, matched by [`find_by_name`](crate::attach::AttachmentRegistry::find_by_name)
    /// for queries without a `/`.
    fn name(&self) -> &str;

    /// Slash-separated path, matched for queries that contain a `/`.
    fn full_path(&self) -> &str;

    /// Hash of [`full_path`](Self::full_path); keys the override cache.
    fn path_hash(&self) -> i32 {
        path_hash(self.full_path())
    }
}

/// 32-bit FNV-1a over the UTF-8 bytes of `path`.
pub fn path_hash(path: &str) -> i32 {
    let mut h: u32 = 0x811c_9dc5;
    for b in path.bytes() {
        h ^= b as u32;
        h = h.wrapping_mul(0x0100_0193);
    }
    h as i32
}

/// Driver with a fixed name and path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedDriver {
    name: String,
    full_path: String,
    hash: i32,
}

impl NamedDriver {
    /// The name is the last `/`-separated segment of `full_path`.
    pub fn new(full_path: impl Into<String>) -> Self {
        let full_path = full_path.into();
        let name = full_path
            .rsplit('/')
            .next()
            .unwrap_or(full_path.as_str())
            .to_string();
        let hash = path_hash(&full_path);
        Self { name, full_path, hash }
    }
}

impl AttachmentDriver for NamedDriver {
    fn name(&self) -> &str {
        &self.name
    }

    fn full_path(&self) -> &str {
        &self.full_path
    }

    fn path_hash(&self) -> i32 {
        self.hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_hash_is_stable_and_discriminating() {
        assert_eq!(path_hash("body/arm"), path_hash("body/arm"));
        assert_ne!(path_hash("body/arm"), path_hash("body/leg"));
        // FNV-1a offset basis for the empty string.
        assert_eq!(path_hash(""), 0x811c_9dc5_u32 as i32);
    }

    #[test]
    fn named_driver_takes_last_segment() {
        let d = NamedDriver::new("hero/body/arm");
        assert_eq!(d.name(), "arm");
        assert_eq!(d.full_path(), "hero/body/arm");
        assert_eq!(d.path_hash(), path_hash("hero/body/arm"));
    }
}
