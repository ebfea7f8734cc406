/// Ports module defining interfaces for hexagonal architecture
///
/// Only driven (outbound) ports exist: the use case is called directly by
/// the CLI, and everything it touches outside the core goes through a trait.
pub mod outbound;
