use crate::SlotResult;

/// A single named key-value entry holding the serialized current identity.
///
/// The store only ever reads the slot once at startup and writes it from the
/// same logical thread, so implementations need no locking discipline beyond
/// being `Send + Sync`.
pub trait IdentitySlot: Send + Sync {
    /// Raw slot contents, `None` if nothing has been persisted.
    fn read(&self) -> SlotResult<Option<String>>;

    fn write(&self, contents: &str) -> SlotResult<()>;

    /// Removing an empty slot is not an error.
    fn remove(&self) -> SlotResult<()>;

    /// Human-readable location, used in logs and corruption errors.
    fn describe(&self) -> String;
}
