/// The search view as an explicit state machine
///
/// Transitions are pure: `SearchViewState::update` takes the current state
/// and one event and returns the next state plus at most one command for the
/// runtime (arm/cancel the debounce timer, or issue a fetch).
pub mod event;
pub mod view_state;

pub use event::{Command, RequestId, ViewEvent};
pub use view_state::{LoadedView, Phase, SearchViewState};
