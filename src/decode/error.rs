use thiserror::Error;

use crate::frame::MessageFamily;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("{family} block is {actual} bytes, expected at least {expected}")]
    ShortBlock {
        family: MessageFamily,
        expected: usize,
        actual: usize,
    },
}
