/// Application layer - Use cases, DTOs and read models
///
/// This layer drives the search state machine from user input and timers,
/// and turns its state into render-ready read models.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
