/// The standard result type used throughout the library.
pub type StdResult<T> = Result<T, anyhow::Error>;
