#![forbid(unsafe_code)]

pub mod count;
pub mod reader;

pub use count::{count_chunks, count_chunks_with_limit};
pub use reader::{DEFAULT_MAX_RECORD_LEN, MessageReader, StreamError, open_stream, open_stream_with_limit};
