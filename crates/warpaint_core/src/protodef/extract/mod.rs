use tracing::{debug, info, trace};

use crate::protodef::{BlockIter, DefMap, DefMessage, Dispatch, ProtoDefError, Result};

/// Scan a whole container and decode every record of a registered type.
///
/// Records of unregistered types are consumed without decoding. Any read or
/// decode failure aborts the scan and no partial map is returned.
pub fn extract_defs(bytes: &[u8]) -> Result<DefMap> {
	let mut map = DefMap::new();
	let mut blocks = 0_usize;
	let mut decoded = 0_usize;
	let mut skipped = 0_usize;

	for (block_idx, block) in BlockIter::new(bytes).enumerate() {
		let block = block?;
		let type_id = block.head.type_id;
		let dispatch = Dispatch::for_type(type_id);
		debug!(
			offset = block.file_offset,
			type_id,
			count = block.head.count,
			?dispatch,
			"block"
		);
		blocks += 1;

		let Dispatch::Decode(kind) = dispatch else {
			skipped += block.records.len();
			continue;
		};

		for (record_idx, record) in block.records.iter().enumerate() {
			let message = DefMessage::decode(kind, record.payload).map_err(|source| ProtoDefError::Decode {
				type_id,
				kind: kind.label(),
				block: block_idx,
				record: record_idx,
				at: record.payload_offset(),
				source,
			})?;
			trace!(
				offset = record.file_offset,
				size = record.payload.len(),
				defindex = message.definition_index(),
				"record"
			);
			if map.insert(type_id, message).is_some() {
				debug!(type_id, record = record_idx, "definition index replaced by later record");
			}
			decoded += 1;
		}
	}

	info!(bytes = bytes.len(), blocks, decoded, skipped, kept = map.len(), "extraction complete");
	Ok(map)
}

#[cfg(test)]
mod tests;
