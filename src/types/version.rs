/// Version assigned by the store when an entity is first persisted.
pub const INITIAL_VERSION: i32 = 1;

/// How the store treats an entity's version on write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionPolicy {
    /// The version is carried as-is; callers own it.
    Fixed,
    /// The store bumps the version on every successful update.
    AutoIncrement,
}

/// Entities that carry an optimistic-concurrency version.
pub trait WithVersion {
    const VERSION_POLICY: VersionPolicy;

    fn version(&self) -> i32;

    /// Version the store persists after an update that matched `self.version()`.
    fn next_version(&self) -> i32 {
        match Self::VERSION_POLICY {
            VersionPolicy::Fixed => self.version(),
            VersionPolicy::AutoIncrement => self.version() + 1,
        }
    }
}
