use crate::protodef::{BlockHeader, Record, Result, read_block_header, read_record};

/// One block: its header and every record it declares.
#[derive(Debug, Clone)]
pub struct Block<'a> {
	/// Parsed block header.
	pub head: BlockHeader,
	/// Offset of the block header in the container.
	pub file_offset: usize,
	/// Records in container order; always `head.count` entries.
	pub records: Vec<Record<'a>>,
	/// Offset immediately after the last record, where the next block begins.
	pub end_offset: usize,
}

/// Sequential block scanner over a whole container.
///
/// Blocks tile the buffer end-to-end. Iteration ends cleanly only when the
/// offset lands exactly on the buffer end; any failed read is yielded once
/// and then iteration stops.
pub struct BlockIter<'a> {
	bytes: &'a [u8],
	offset: usize,
	done: bool,
}

impl<'a> BlockIter<'a> {
	/// Start scanning at offset 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self {
			bytes,
			offset: 0,
			done: false,
		}
	}

	fn read_block(&mut self) -> Result<Block<'a>> {
		let file_offset = self.offset;
		let (head, mut next) = read_block_header(self.bytes, file_offset)?;

		// Capacity is bounded by the bytes left, since every record needs a prefix.
		let rem = self.bytes.len().saturating_sub(next);
		let mut records = Vec::with_capacity((head.count as usize).min(rem / Record::PREFIX_SIZE));
		for _ in 0..head.count {
			let (record, after) = read_record(self.bytes, next)?;
			records.push(record);
			next = after;
		}

		self.offset = next;
		Ok(Block {
			head,
			file_offset,
			records,
			end_offset: next,
		})
	}
}

impl<'a> Iterator for BlockIter<'a> {
	type Item = Result<Block<'a>>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		if self.offset == self.bytes.len() {
			self.done = true;
			return None;
		}

		let block = self.read_block();
		if block.is_err() {
			self.done = true;
		}
		Some(block)
	}
}

#[cfg(test)]
mod tests;
