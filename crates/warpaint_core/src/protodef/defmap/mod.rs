use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::protodef::{DefMessage, ProtoDefError, Result};

/// Decoded messages keyed by block type id, then by definition index.
///
/// Both keys are decimal text so the map renders directly as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DefMap {
	entries: BTreeMap<String, BTreeMap<String, DefMessage>>,
}

impl DefMap {
	/// Create an empty map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Store `message` under `type_id` and its header definition index.
	///
	/// A message already stored at that position is replaced and returned.
	pub fn insert(&mut self, type_id: i32, message: DefMessage) -> Option<DefMessage> {
		let index_key = message.definition_index().to_string();
		self.entries.entry(type_id.to_string()).or_default().insert(index_key, message)
	}

	/// Look up one message.
	pub fn get(&self, type_id: i32, definition_index: u32) -> Option<&DefMessage> {
		self.entries.get(&type_id.to_string())?.get(&definition_index.to_string())
	}

	/// All messages stored for one type id.
	pub fn messages_of(&self, type_id: i32) -> Option<&BTreeMap<String, DefMessage>> {
		self.entries.get(&type_id.to_string())
	}

	/// Number of distinct type ids present.
	pub fn type_count(&self) -> usize {
		self.entries.len()
	}

	/// Total number of stored messages.
	pub fn len(&self) -> usize {
		self.entries.values().map(BTreeMap::len).sum()
	}

	/// Return `true` when no message is stored.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterate `(type key, index key, message)` in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &DefMessage)> {
		self.entries
			.iter()
			.flat_map(|(type_key, inner)| inner.iter().map(move |(index_key, msg)| (type_key.as_str(), index_key.as_str(), msg)))
	}

	/// Render the map as a JSON document.
	pub fn to_json(&self, pretty: bool) -> Result<Vec<u8>> {
		let out = if pretty { serde_json::to_vec_pretty(self)? } else { serde_json::to_vec(self)? };
		Ok(out)
	}
}

/// Render `map` and write it to `path`.
///
/// The document is rendered fully, written to a sibling temporary file, and
/// renamed over `path`. Any failure leaves `path` untouched.
pub fn write_json(map: &DefMap, path: impl AsRef<Path>, pretty: bool) -> Result<()> {
	let path = path.as_ref();
	let out = map.to_json(pretty)?;

	let tmp = temp_sibling(path);
	let written = write_synced(&tmp, &out).and_then(|()| fs::rename(&tmp, path));
	if let Err(source) = written {
		let _ = fs::remove_file(&tmp);
		return Err(ProtoDefError::WriteOutput {
			path: path.to_path_buf(),
			source,
		});
	}
	Ok(())
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
	let mut file = File::create(path)?;
	file.write_all(bytes)?;
	file.sync_all()
}

fn temp_sibling(path: &Path) -> PathBuf {
	let name = path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default();
	path.with_file_name(format!(".{name}.{}.tmp", std::process::id()))
}
