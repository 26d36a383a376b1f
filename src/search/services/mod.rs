/// Stateless services over the search payload
pub mod option_deriver;

pub use option_deriver::{derive_options, SelectorOptions};
