use crate::protodef::bytes::Cursor;
use crate::protodef::{ProtoDefError, Result};

/// Parsed block header: a type tag and the number of records that follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
	/// Record type identifier shared by every record in the block.
	pub type_id: i32,
	/// Number of length-prefixed records following the header.
	pub count: u32,
}

impl BlockHeader {
	/// Encoded header size in bytes.
	pub const SIZE: usize = 8;

	/// Parse a block header from cursor position.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		let at = cursor.pos();
		let type_id = cursor.read_i32_le()?;
		let count = cursor.read_i32_le()?;
		let count = u32::try_from(count).map_err(|_| ProtoDefError::NegativeRecordCount { at, count })?;
		Ok(Self { type_id, count })
	}
}

/// One length-prefixed record payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
	/// Offset of the record's size prefix.
	pub file_offset: usize,
	/// Payload bytes, exactly as long as the declared size.
	pub payload: &'a [u8],
}

impl<'a> Record<'a> {
	/// Size of the little-endian length prefix.
	pub const PREFIX_SIZE: usize = 4;

	/// Parse a size prefix and its payload from cursor position.
	pub fn parse(cursor: &mut Cursor<'a>) -> Result<Self> {
		let file_offset = cursor.pos();
		let size = cursor.read_i32_le()?;
		let size = usize::try_from(size).map_err(|_| ProtoDefError::NegativeRecordSize { at: file_offset, size })?;

		let rem = cursor.remaining();
		if size > rem {
			return Err(ProtoDefError::RecordOutOfRange { at: file_offset, size, rem });
		}

		let payload = cursor.read_exact(size)?;
		Ok(Self { file_offset, payload })
	}

	/// Offset of the first payload byte.
	pub fn payload_offset(&self) -> usize {
		self.file_offset + Self::PREFIX_SIZE
	}

	/// Offset immediately after the payload.
	pub fn end_offset(&self) -> usize {
		self.payload_offset() + self.payload.len()
	}
}

/// Read the block header at `offset`, returning it with the offset just past it.
pub fn read_block_header(bytes: &[u8], offset: usize) -> Result<(BlockHeader, usize)> {
	let mut cursor = Cursor::at(bytes, offset);
	let header = BlockHeader::parse(&mut cursor)?;
	Ok((header, cursor.pos()))
}

/// Read the record at `offset`, returning it with the offset just past its payload.
pub fn read_record(bytes: &[u8], offset: usize) -> Result<(Record<'_>, usize)> {
	let mut cursor = Cursor::at(bytes, offset);
	let record = Record::parse(&mut cursor)?;
	Ok((record, cursor.pos()))
}
