//! The vg message family (`vg.proto` subset) that stream records decode as.
//!
//! Field numbers match the vg wire schema, so payloads produced by vg
//! toolchains decode with these types. Written with `prost` derives rather
//! than generated at build time.

/// One sequence node of a variation graph.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Node {
	#[prost(string, tag = "1")]
	pub sequence: String,
	#[prost(string, tag = "2")]
	pub name: String,
	#[prost(int64, tag = "3")]
	pub id: i64,
}

/// A directed edge between two node sides.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Edge {
	#[prost(int64, tag = "1")]
	pub from: i64,
	#[prost(int64, tag = "2")]
	pub to: i64,
	#[prost(bool, tag = "3")]
	pub from_start: bool,
	#[prost(bool, tag = "4")]
	pub to_end: bool,
	#[prost(int32, tag = "5")]
	pub overlap: i32,
}

/// An oriented offset on a node.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Position {
	#[prost(int64, tag = "1")]
	pub node_id: i64,
	#[prost(int64, tag = "2")]
	pub offset: i64,
	#[prost(bool, tag = "4")]
	pub is_reverse: bool,
	#[prost(string, tag = "5")]
	pub name: String,
}

/// A match, mismatch or indel against a node sequence.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Edit {
	#[prost(int64, tag = "1")]
	pub from_length: i64,
	#[prost(int64, tag = "2")]
	pub to_length: i64,
	#[prost(string, tag = "3")]
	pub sequence: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Mapping {
	#[prost(message, optional, tag = "1")]
	pub position: Option<Position>,
	#[prost(message, repeated, tag = "2")]
	pub edit: Vec<Edit>,
	#[prost(int64, tag = "5")]
	pub rank: i64,
}

/// A named walk through the graph.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Path {
	#[prost(string, tag = "1")]
	pub name: String,
	#[prost(message, repeated, tag = "2")]
	pub mapping: Vec<Mapping>,
	#[prost(bool, tag = "3")]
	pub is_circular: bool,
	#[prost(int64, tag = "4")]
	pub length: i64,
}

/// One graph chunk. Stream files carry a sequence of these.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Graph {
	#[prost(message, repeated, tag = "1")]
	pub node: Vec<Node>,
	#[prost(message, repeated, tag = "2")]
	pub edge: Vec<Edge>,
	#[prost(message, repeated, tag = "5")]
	pub path: Vec<Path>,
}
