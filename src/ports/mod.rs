/// Ports module defining interfaces for hexagonal architecture
///
/// Only driven (outbound) ports exist: the search session itself is the
/// driving API, called directly by the CLI.
pub mod outbound;
