#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use bytes::BytesMut;
use prost::Message;
use thiserror::Error;
use tracing::debug;

/// Default maximum size of a single record. vg graph chunks are large.
pub const DEFAULT_MAX_RECORD_LEN: usize = 64 * 1024 * 1024; // 64 MiB

/// Longest possible varint length delimiter.
const MAX_DELIMITER_LEN: usize = 10;

#[derive(Debug, Error)]
pub enum StreamError {
	#[error("cannot open {path}: {source}")]
	Open {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("read failed: {0}")]
	Read(#[from] io::Error),

	#[error("record exceeds maximum size: len={len} max={max}")]
	RecordTooLarge {
		len: usize,
		max: usize,
	},

	#[error("stream ends inside a record")]
	UnexpectedEof,

	#[error("record decode error: {0}")]
	Decode(#[from] prost::DecodeError),
}

/// Lazy reader over the length-delimited records of a stream file.
///
/// Yields each record as it is decoded and never holds more than one record
/// in memory. The record buffer is reused between records. After the first
/// error the iterator fuses: framing offsets past a corrupt record cannot be
/// trusted, so no further records are produced.
pub struct MessageReader<R, M> {
	reader: R,
	buf: BytesMut,
	max_record_len: usize,
	failed: bool,
	_message: PhantomData<fn() -> M>,
}

impl<R, M> MessageReader<R, M>
where
	R: BufRead,
	M: Message + Default,
{
	/// Wrap `reader` using `DEFAULT_MAX_RECORD_LEN`.
	pub fn new(reader: R) -> Self {
		Self::with_max_record_len(reader, DEFAULT_MAX_RECORD_LEN)
	}

	/// Wrap `reader` with an explicit per-record size limit.
	pub fn with_max_record_len(reader: R, max_record_len: usize) -> Self {
		Self {
			reader,
			buf: BytesMut::new(),
			max_record_len,
			failed: false,
			_message: PhantomData,
		}
	}

	/// Read the next length delimiter. `Ok(None)` is clean end of stream.
	///
	/// Delimiter bytes are pulled one at a time and handed to prost, which
	/// owns the varint encoding.
	fn next_record_len(&mut self) -> Result<Option<usize>, StreamError> {
		let mut prefix = [0u8; MAX_DELIMITER_LEN];
		let mut filled = 0;

		loop {
			let mut byte = [0u8; 1];
			match self.reader.read(&mut byte) {
				Ok(0) if filled == 0 => return Ok(None),
				Ok(0) => return Err(StreamError::UnexpectedEof),
				Ok(_) => {
					prefix[filled] = byte[0];
					filled += 1;
					// Stop on the final varint byte; a full prefix with the
					// continuation bit still set is left for prost to reject.
					if byte[0] & 0x80 == 0 || filled == MAX_DELIMITER_LEN {
						break;
					}
				}
				Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
				Err(e) => return Err(StreamError::Read(e)),
			}
		}

		let len = prost::decode_length_delimiter(&prefix[..filled])?;
		Ok(Some(len))
	}

	fn read_record(&mut self, len: usize) -> Result<M, StreamError> {
		if len > self.max_record_len {
			return Err(StreamError::RecordTooLarge {
				len,
				max: self.max_record_len,
			});
		}

		self.buf.resize(len, 0);
		self.reader.read_exact(&mut self.buf[..]).map_err(|e| match e.kind() {
			io::ErrorKind::UnexpectedEof => StreamError::UnexpectedEof,
			_ => StreamError::Read(e),
		})?;

		Ok(M::decode(&self.buf[..])?)
	}
}

impl<R, M> Iterator for MessageReader<R, M>
where
	R: BufRead,
	M: Message + Default,
{
	type Item = Result<M, StreamError>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.failed {
			return None;
		}

		let len = match self.next_record_len() {
			Ok(Some(len)) => len,
			Ok(None) => return None,
			Err(e) => {
				self.failed = true;
				return Some(Err(e));
			}
		};

		match self.read_record(len) {
			Ok(msg) => Some(Ok(msg)),
			Err(e) => {
				self.failed = true;
				Some(Err(e))
			}
		}
	}
}

/// Open the stream file at `path` as a lazy record reader.
pub fn open_stream<M>(path: &Path) -> Result<MessageReader<BufReader<File>, M>, StreamError>
where
	M: Message + Default,
{
	open_stream_with_limit(path, DEFAULT_MAX_RECORD_LEN)
}

/// Same as [`open_stream`] with an explicit per-record size limit.
pub fn open_stream_with_limit<M>(
	path: &Path,
	max_record_len: usize,
) -> Result<MessageReader<BufReader<File>, M>, StreamError>
where
	M: Message + Default,
{
	let file = File::open(path).map_err(|source| StreamError::Open {
		path: path.to_path_buf(),
		source,
	})?;
	debug!(path = %path.display(), max_record_len, "opened chunk stream");
	Ok(MessageReader::with_max_record_len(BufReader::new(file), max_record_len))
}
