use std::fs;
use std::path::Path;

use proptest::prelude::*;
use prost::Message;
use tempfile::tempdir;
use vgstream_io::{StreamError, count_chunks, count_chunks_with_limit, open_stream};
use vgstream_proto::pb::{Edge, Graph, Node};

fn write_delimited<M: Message>(path: &Path, msgs: &[M]) {
	let mut buf = Vec::new();
	for m in msgs {
		m.encode_length_delimited(&mut buf).expect("encode");
	}
	fs::write(path, buf).expect("write fixture");
}

fn sample_graph(base: i64) -> Graph {
	Graph {
		node: vec![
			Node {
				sequence: "GATTACA".to_string(),
				name: format!("n{base}"),
				id: base,
			},
			Node {
				sequence: "CCTG".to_string(),
				name: format!("n{}", base + 1),
				id: base + 1,
			},
		],
		edge: vec![Edge {
			from: base,
			to: base + 1,
			..Edge::default()
		}],
		path: Vec::new(),
	}
}

#[test]
fn empty_file_counts_zero() {
	let dir = tempdir().expect("tempdir");
	let path = dir.path().join("empty.vg");
	write_delimited::<Graph>(&path, &[]);

	assert_eq!(count_chunks::<Graph>(&path).expect("count"), 0);
}

#[test]
fn counts_three_graph_chunks() {
	let dir = tempdir().expect("tempdir");
	let path = dir.path().join("three.vg");
	write_delimited(&path, &[sample_graph(1), sample_graph(10), sample_graph(100)]);

	assert_eq!(count_chunks::<Graph>(&path).expect("count"), 3);
}

#[test]
fn counting_is_idempotent() {
	let dir = tempdir().expect("tempdir");
	let path = dir.path().join("twice.vg");
	write_delimited(&path, &[sample_graph(1), sample_graph(2)]);

	let first = count_chunks::<Graph>(&path).expect("first count");
	let second = count_chunks::<Graph>(&path).expect("second count");
	assert_eq!(first, 2);
	assert_eq!(first, second);
}

#[test]
fn counts_ten_thousand_records() {
	let dir = tempdir().expect("tempdir");
	let path = dir.path().join("many.vg");

	let nodes: Vec<Node> = (0..10_000)
		.map(|i| Node {
			sequence: "ACGT".to_string(),
			name: format!("n{i}"),
			id: i,
		})
		.collect();
	write_delimited(&path, &nodes);

	assert_eq!(count_chunks::<Node>(&path).expect("count"), 10_000);
}

#[test]
fn missing_file_is_open_error() {
	let dir = tempdir().expect("tempdir");
	let path = dir.path().join("does-not-exist.vg");

	let err = count_chunks::<Graph>(&path).unwrap_err();
	match err {
		StreamError::Open { path: reported, .. } => assert_eq!(reported, path),
		other => panic!("unexpected error: {other:?}"),
	}
}

#[test]
fn truncated_final_record_yields_no_partial_count() {
	let dir = tempdir().expect("tempdir");
	let path = dir.path().join("truncated.vg");
	write_delimited(&path, &[sample_graph(1), sample_graph(2), sample_graph(3)]);

	let mut bytes = fs::read(&path).expect("read back");
	bytes.pop();
	fs::write(&path, bytes).expect("rewrite");

	let err = count_chunks::<Graph>(&path).unwrap_err();
	assert!(matches!(err, StreamError::UnexpectedEof));
}

#[test]
fn wire_incompatible_record_aborts_count() {
	// An Edge encodes field 1 as a varint; Graph needs field 1
	// length-delimited. prost does not filter foreign records out, it fails
	// on the wire type conflict and the whole count is abandoned.
	let dir = tempdir().expect("tempdir");
	let path = dir.path().join("mixed.vg");

	let mut buf = Vec::new();
	sample_graph(1).encode_length_delimited(&mut buf).expect("encode");
	sample_graph(2).encode_length_delimited(&mut buf).expect("encode");
	Edge {
		from: 7,
		to: 8,
		..Edge::default()
	}
	.encode_length_delimited(&mut buf)
	.expect("encode");
	sample_graph(3).encode_length_delimited(&mut buf).expect("encode");
	fs::write(&path, buf).expect("write fixture");

	let err = count_chunks::<Graph>(&path).unwrap_err();
	assert!(matches!(err, StreamError::Decode(_)));
}

#[test]
fn per_record_limit_applies_to_file_streams() {
	let dir = tempdir().expect("tempdir");
	let path = dir.path().join("limited.vg");
	write_delimited(&path, &[sample_graph(1)]);

	let err = count_chunks_with_limit::<Graph>(&path, 4).unwrap_err();
	assert!(matches!(err, StreamError::RecordTooLarge { .. }));
}

#[test]
fn reader_yields_decoded_graphs_in_order() {
	let dir = tempdir().expect("tempdir");
	let path = dir.path().join("ordered.vg");
	let graphs = [sample_graph(1), sample_graph(10)];
	write_delimited(&path, &graphs);

	let decoded: Vec<Graph> = open_stream::<Graph>(&path)
		.expect("open")
		.map(|r| r.expect("record"))
		.collect();
	assert_eq!(decoded, graphs);
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(64))]

	#[test]
	fn count_matches_number_of_written_records(seqs in prop::collection::vec("[ACGT]{0,12}", 0..50)) {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("prop.vg");

		let nodes: Vec<Node> = seqs
			.iter()
			.enumerate()
			.map(|(i, s)| Node {
				sequence: s.clone(),
				name: format!("n{i}"),
				id: i as i64,
			})
			.collect();
		write_delimited(&path, &nodes);

		prop_assert_eq!(count_chunks::<Node>(&path).expect("count"), nodes.len() as u64);
	}
}
