use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum HeadingError {
    #[error("heading {0} is not a finite number")]
    NotFinite(f64),
}

pub type HeadingResult<T> = Result<T, HeadingError>;
