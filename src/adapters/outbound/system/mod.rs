/// Host adapters for facts about the running system
mod host;

pub use host::{SystemHost, OS_RELEASE_PATH};
