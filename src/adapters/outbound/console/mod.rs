/// Console adapters: stderr diagnostics and stdout frames
mod progress_reporter;
mod stdout_presenter;

pub use progress_reporter::StderrProgressReporter;
pub use stdout_presenter::StdoutPresenter;
