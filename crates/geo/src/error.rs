use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("CRS resolution error: {0}")]
    CrsResolution(String),
    #[error("Coordinate transform error: {0}")]
    Transform(String),
    #[cfg(feature = "proj4rs")]
    #[error("Proj4rs error: {0}")]
    Proj4rsError(#[from] proj4rs::errors::Error),
}
