//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static SCRATCH_SEQ: AtomicUsize = AtomicUsize::new(0);

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Create a fresh, empty scratch directory under `<target>/warpaint-scratch`.
///
/// Every call returns a distinct directory, so parallel tests never share files.
pub fn scratch_dir(label: &str) -> PathBuf {
	let seq = SCRATCH_SEQ.fetch_add(1, Ordering::Relaxed);
	let dir = target_dir()
		.join("warpaint-scratch")
		.join(format!("{label}-{}-{seq}", std::process::id()));
	if dir.exists() {
		std::fs::remove_dir_all(&dir).expect("stale scratch dir removed");
	}
	std::fs::create_dir_all(&dir).expect("scratch dir created");
	dir
}

/// Byte-level builder for `proto_defs` containers.
///
/// Blocks are appended in order; each is written as `typeId`, `recordCount`
/// and then the length-prefixed payloads, all little-endian `i32`.
#[derive(Debug, Default, Clone)]
pub struct ContainerBuilder {
	bytes: Vec<u8>,
}

impl ContainerBuilder {
	/// Start an empty container.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a well-formed block holding `payloads`.
	pub fn block<P: AsRef<[u8]>>(mut self, type_id: i32, payloads: &[P]) -> Self {
		let count = i32::try_from(payloads.len()).expect("record count fits i32");
		self.bytes.extend_from_slice(&type_id.to_le_bytes());
		self.bytes.extend_from_slice(&count.to_le_bytes());
		for payload in payloads {
			self = self.record(payload.as_ref());
		}
		self
	}

	/// Append a bare block header with an arbitrary declared count.
	pub fn block_header(mut self, type_id: i32, count: i32) -> Self {
		self.bytes.extend_from_slice(&type_id.to_le_bytes());
		self.bytes.extend_from_slice(&count.to_le_bytes());
		self
	}

	/// Append one length-prefixed record.
	pub fn record(mut self, payload: &[u8]) -> Self {
		let size = i32::try_from(payload.len()).expect("record size fits i32");
		self.bytes.extend_from_slice(&size.to_le_bytes());
		self.bytes.extend_from_slice(payload);
		self
	}

	/// Append a record size prefix without the payload that should follow it.
	pub fn record_size(mut self, size: i32) -> Self {
		self.bytes.extend_from_slice(&size.to_le_bytes());
		self
	}

	/// Append raw bytes verbatim.
	pub fn raw(mut self, bytes: &[u8]) -> Self {
		self.bytes.extend_from_slice(bytes);
		self
	}

	/// Finish and return the container bytes.
	pub fn build(self) -> Vec<u8> {
		self.bytes
	}
}
