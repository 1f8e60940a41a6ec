use crate::protodef::{ProtoDefError, Result};

/// Bounded little-endian cursor over an immutable container buffer.
///
/// Positions are absolute offsets into the backing slice.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Create a cursor at an absolute offset.
	pub fn at(bytes: &'a [u8], pos: usize) -> Self {
		Self { bytes, pos }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		let eof = || ProtoDefError::UnexpectedEof {
			at: self.pos,
			need: n,
			rem: self.remaining(),
		};
		let end = self.pos.checked_add(n).ok_or_else(eof)?;
		let out = self.bytes.get(self.pos..end).ok_or_else(eof)?;
		self.pos = end;
		Ok(out)
	}

	/// Read a little-endian `i32`.
	pub fn read_i32_le(&mut self) -> Result<i32> {
		let raw = self.read_exact(4)?;
		let mut buf = [0_u8; 4];
		buf.copy_from_slice(raw);
		Ok(i32::from_le_bytes(buf))
	}
}
