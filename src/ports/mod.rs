/// Ports module defining interfaces for hexagonal architecture
///
/// This module contains both inbound ports (driving ports - use case interfaces)
/// and outbound ports (driven ports - host, filesystem and console interfaces).
pub mod inbound;
pub mod outbound;
