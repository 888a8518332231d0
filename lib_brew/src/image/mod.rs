pub mod encoder;
pub mod format;

pub use encoder::{encode, write_chunk, EncodingError};
