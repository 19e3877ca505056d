use crate::error::ScrumError;

pub type ScrumResult<T> = Result<T, ScrumError>;
