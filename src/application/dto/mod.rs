/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI adapter and the search session,
/// keeping the search core free of input parsing concerns.
mod output_format;
mod session_input;

pub use output_format::OutputFormat;
pub use session_input::{SessionInput, UserAction};
