/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (search backend, console, output).
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod search_repository;

pub use formatter::ViewFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use search_repository::SearchRepository;
