/// Type alias for Result with anyhow::Error as the error type.
/// Fatal errors travel through this alias; soft errors never do.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
