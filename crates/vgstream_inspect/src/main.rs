#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context as _;
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use vgstream_io::{DEFAULT_MAX_RECORD_LEN, count_chunks_with_limit};
use vgstream_proto::{ChunkKind, pb};

fn usage_and_exit() -> ! {
	eprintln!(
		"Usage: vgstream_inspect [--type <kind>] [--max-record-bytes <n>] <file>\n\
\n\
Counts the length-delimited protobuf chunks in a vg stream file and prints\n\
the count to stdout.\n\
\n\
Options:\n\
\t--type               Chunk kind to decode: graph, node, edge or path\n\
\t                     (default: graph)\n\
\t--max-record-bytes   Reject records larger than this many bytes\n\
\t                     (default: {DEFAULT_MAX_RECORD_LEN})\n\
\t--help               Show this help\n\
"
	);
	std::process::exit(2)
}

struct Args {
	path: PathBuf,
	kind: ChunkKind,
	max_record_bytes: usize,
}

fn parse_args() -> Args {
	let mut kind = ChunkKind::Graph;
	let mut max_record_bytes = DEFAULT_MAX_RECORD_LEN;
	let mut path: Option<PathBuf> = None;

	let mut it = std::env::args().skip(1);
	while let Some(arg) = it.next() {
		match arg.as_str() {
			"--help" | "-h" => usage_and_exit(),
			"--type" | "-t" => {
				let v = it.next().unwrap_or_else(|| usage_and_exit());
				kind = v.parse().unwrap_or_else(|e| {
					eprintln!("{e}");
					usage_and_exit();
				});
			}
			"--max-record-bytes" => {
				let v = it.next().unwrap_or_else(|| usage_and_exit());
				max_record_bytes = v.parse().unwrap_or_else(|_| {
					eprintln!("--max-record-bytes expects a byte count, got: {v}");
					usage_and_exit();
				});
			}
			other if other.starts_with('-') => {
				eprintln!("Unknown argument: {other}");
				usage_and_exit();
			}
			other => {
				if path.is_some() {
					eprintln!("Only one input file is supported");
					usage_and_exit();
				}
				path = Some(PathBuf::from(other));
			}
		}
	}

	let Some(path) = path else {
		eprintln!("Missing input file");
		usage_and_exit();
	};

	Args {
		path,
		kind,
		max_record_bytes,
	}
}

fn init_tracing() {
	let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

	// Logs go to stderr; stdout carries nothing but the count.
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::new(filter))
		.with(
			tracing_subscriber::fmt::layer()
				.with_target(false)
				.with_writer(std::io::stderr),
		)
		.init();
}

fn main() -> anyhow::Result<()> {
	init_tracing();

	let args = parse_args();
	debug!(path = %args.path.display(), kind = %args.kind, "counting chunks");

	let count = match args.kind {
		ChunkKind::Graph => count_chunks_with_limit::<pb::Graph>(&args.path, args.max_record_bytes),
		ChunkKind::Node => count_chunks_with_limit::<pb::Node>(&args.path, args.max_record_bytes),
		ChunkKind::Edge => count_chunks_with_limit::<pb::Edge>(&args.path, args.max_record_bytes),
		ChunkKind::Path => count_chunks_with_limit::<pb::Path>(&args.path, args.max_record_bytes),
	}
	.with_context(|| format!("count {} chunks in {}", args.kind, args.path.display()))?;

	println!("{count}");
	Ok(())
}
