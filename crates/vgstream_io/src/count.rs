#![forbid(unsafe_code)]

use std::path::Path;

use prost::Message;
use tracing::debug;

use crate::reader::{DEFAULT_MAX_RECORD_LEN, StreamError, open_stream_with_limit};

/// Count the length-delimited records of type `M` in the file at `path`.
///
/// Each record is decoded, counted and dropped immediately, so memory use
/// stays flat no matter how many records the file holds. The count is exact:
/// any open or decode failure aborts the traversal and no partial count is
/// returned.
pub fn count_chunks<M>(path: &Path) -> Result<u64, StreamError>
where
	M: Message + Default,
{
	count_chunks_with_limit::<M>(path, DEFAULT_MAX_RECORD_LEN)
}

/// Same as [`count_chunks`] with an explicit per-record size limit.
pub fn count_chunks_with_limit<M>(path: &Path, max_record_len: usize) -> Result<u64, StreamError>
where
	M: Message + Default,
{
	let mut count: u64 = 0;
	for record in open_stream_with_limit::<M>(path, max_record_len)? {
		record?;
		count += 1;
	}

	debug!(path = %path.display(), count, "chunk stream exhausted");
	Ok(count)
}
