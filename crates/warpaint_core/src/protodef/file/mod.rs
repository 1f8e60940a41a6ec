use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::protodef::{BlockIter, DefMap, Dispatch, ProtoDefError, Result, extract_defs};

/// A `proto_defs` container loaded fully into memory.
pub struct ProtoDefFile {
	bytes: Vec<u8>,
}

impl ProtoDefFile {
	/// Read a container from disk.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let bytes = fs::read(path).map_err(|source| ProtoDefError::ReadInput {
			path: path.to_path_buf(),
			source,
		})?;
		debug!(path = %path.display(), len = bytes.len(), "container loaded");
		Ok(Self::from_bytes(bytes))
	}

	/// Wrap bytes already in memory.
	pub fn from_bytes(bytes: Vec<u8>) -> Self {
		Self { bytes }
	}

	/// Return raw container bytes.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Iterate all blocks from offset 0.
	pub fn blocks(&self) -> BlockIter<'_> {
		BlockIter::new(&self.bytes)
	}

	/// Decode all registered records into a [`DefMap`].
	pub fn extract(&self) -> Result<DefMap> {
		extract_defs(&self.bytes)
	}

	/// Walk the container without decoding and tally blocks and records per type.
	pub fn scan_stats(&self) -> Result<ScanStats> {
		let mut stats = ScanStats {
			bytes: self.bytes.len(),
			block_count: 0,
			record_count: 0,
			types: BTreeMap::new(),
		};

		for block in self.blocks() {
			let block = block?;
			let type_id = block.head.type_id;
			stats.block_count += 1;
			stats.record_count += block.records.len();

			let entry = stats.types.entry(type_id).or_insert_with(|| TypeStats {
				blocks: 0,
				records: 0,
				kind: match Dispatch::for_type(type_id) {
					Dispatch::Decode(kind) => Some(kind.label()),
					Dispatch::Skip => None,
				},
			});
			entry.blocks += 1;
			entry.records += block.records.len();
		}

		Ok(stats)
	}
}

/// Block and record distribution of one container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanStats {
	/// Container length in bytes.
	pub bytes: usize,
	/// Number of blocks.
	pub block_count: usize,
	/// Number of records across all blocks.
	pub record_count: usize,
	/// Per type id tallies.
	pub types: BTreeMap<i32, TypeStats>,
}

/// Tallies for one block type id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeStats {
	/// Blocks carrying this type id.
	pub blocks: usize,
	/// Records carried by those blocks.
	pub records: usize,
	/// Schema variant label when the type is registered; `None` when skipped.
	pub kind: Option<&'static str>,
}
