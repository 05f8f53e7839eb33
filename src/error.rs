use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlideError {
    #[error("Slide index {index} is out of range for {len} slides")]
    InvalidIndex { index: usize, len: usize },

    #[error("Malformed slide index: {0:?}")]
    MalformedIndex(String),
}

pub type Result<T> = std::result::Result<T, SlideError>;
