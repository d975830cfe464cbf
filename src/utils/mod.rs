mod errors;

pub use errors::Error;

pub type MoviehookResult<T> = Result<T, Error>;
