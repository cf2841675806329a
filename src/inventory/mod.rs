/// Inventory core - domain model, pure services and policies
///
/// Nothing in this module touches the filesystem; adapters feed it paths
/// and file contents.
pub mod domain;
pub mod policies;
pub mod services;
