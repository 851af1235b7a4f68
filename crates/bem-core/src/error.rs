use crate::handle::Handle;
use thiserror::Error;

pub type BemResult<T> = Result<T, BemError>;

#[derive(Error, Debug)]
pub enum BemError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Unknown handle for {what}: {handle}")]
    UnknownHandle { what: &'static str, handle: Handle },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
