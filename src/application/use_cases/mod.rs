/// Use cases module containing application orchestration
mod search_session;

pub use search_session::{SearchSession, DEFAULT_DEBOUNCE};
