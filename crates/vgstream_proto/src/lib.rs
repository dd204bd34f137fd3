#![forbid(unsafe_code)]

pub mod pb;

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// Message types a vg stream file can consist of.
///
/// A stream file is homogeneous: every record decodes as the same type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkKind {
	Graph,
	Node,
	Edge,
	Path,
}

impl ChunkKind {
	/// Stable string identifier.
	pub const fn as_str(self) -> &'static str {
		match self {
			ChunkKind::Graph => "graph",
			ChunkKind::Node => "node",
			ChunkKind::Edge => "edge",
			ChunkKind::Path => "path",
		}
	}
}

impl fmt::Display for ChunkKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Errors for parsing a chunk kind from a string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseKindError {
	#[error("empty chunk kind")]
	Empty,
	#[error("unknown chunk kind: {0} (expected graph, node, edge or path)")]
	UnknownKind(String),
}

impl FromStr for ChunkKind {
	type Err = ParseKindError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		if s.is_empty() {
			return Err(ParseKindError::Empty);
		}

		match s.to_ascii_lowercase().as_str() {
			"graph" => Ok(ChunkKind::Graph),
			"node" => Ok(ChunkKind::Node),
			"edge" => Ok(ChunkKind::Edge),
			"path" => Ok(ChunkKind::Path),
			other => Err(ParseKindError::UnknownKind(other.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn kind_parse_and_display() {
		assert_eq!("graph".parse::<ChunkKind>().unwrap(), ChunkKind::Graph);
		assert_eq!(" Node ".parse::<ChunkKind>().unwrap(), ChunkKind::Node);
		assert_eq!(ChunkKind::Edge.to_string(), "edge");
	}

	#[test]
	fn rejects_empty_and_unknown_kinds() {
		assert_eq!("".parse::<ChunkKind>(), Err(ParseKindError::Empty));
		assert_eq!(
			"mapping".parse::<ChunkKind>(),
			Err(ParseKindError::UnknownKind("mapping".to_string()))
		);
	}
}
