/// Search core: payload model, option derivation and the view state machine
///
/// Nothing in here touches the network or the terminal; adapters feed
/// events in and render what comes out.
pub mod domain;
pub mod services;
pub mod state;
