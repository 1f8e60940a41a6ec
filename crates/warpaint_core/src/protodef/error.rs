use std::path::PathBuf;

use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ProtoDefError>;

/// Errors produced while reading, decoding, and rendering `proto_defs` containers.
#[derive(Debug, Error)]
pub enum ProtoDefError {
	/// Input file could not be opened or read.
	#[error("failed to read {}: {source}", .path.display())]
	ReadInput {
		/// Input path.
		path: PathBuf,
		/// Underlying IO failure.
		source: std::io::Error,
	},
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Block header declared a negative record count.
	#[error("negative record count {count} in block at offset {at}")]
	NegativeRecordCount {
		/// Block header offset.
		at: usize,
		/// Parsed signed count.
		count: i32,
	},
	/// Record declared a negative payload size.
	#[error("negative record size {size} at offset {at}")]
	NegativeRecordSize {
		/// Record size prefix offset.
		at: usize,
		/// Parsed signed size.
		size: i32,
	},
	/// Record payload would exceed remaining container data.
	#[error("record size {size} at offset {at} exceeds remaining {rem}")]
	RecordOutOfRange {
		/// Record size prefix offset.
		at: usize,
		/// Declared payload size.
		size: usize,
		/// Bytes remaining after the size prefix.
		rem: usize,
	},
	/// Record of a registered type failed schema decoding.
	#[error("failed to decode {kind} record {record} of block {block} (type {type_id}) at offset {at}: {source}")]
	Decode {
		/// Block type identifier.
		type_id: i32,
		/// Schema variant label.
		kind: &'static str,
		/// Zero-based block index in scan order.
		block: usize,
		/// Zero-based record index within the block.
		record: usize,
		/// Payload offset in the container.
		at: usize,
		/// Decoder failure.
		source: prost::DecodeError,
	},
	/// Result document could not be rendered.
	#[error("failed to render json: {0}")]
	Render(#[from] serde_json::Error),
	/// Output document could not be written.
	#[error("failed to write {}: {source}", .path.display())]
	WriteOutput {
		/// Output path.
		path: PathBuf,
		/// Underlying IO failure.
		source: std::io::Error,
	},
	/// Scan statistics could not be written to stdout.
	#[error("failed to write stats: {0}")]
	WriteStats(#[source] std::io::Error),
}
