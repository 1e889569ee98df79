/// Ports module defining interfaces for hexagonal architecture
///
/// This module contains the outbound ports (driven ports) the application
/// core uses to reach infrastructure.
pub mod outbound;
