use crate::shared::Result;

/// OutputPresenter port for presenting rendered frames
///
/// This port abstracts where a formatted frame ends up (stdout, a buffer in
/// tests, ...).
pub trait OutputPresenter {
    /// Presents one formatted frame
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}
