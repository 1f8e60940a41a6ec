use prost::Message;
use serde::{Serialize, Serializer};

use crate::protodef::{DefKind, HeaderOnly, PaintKitDefinition, PaintKitItemDefinition, PaintKitOperation, ProtoDefHeader};

/// A record payload decoded under one of the registered schema variants.
#[derive(Debug, Clone, PartialEq)]
pub enum DefMessage {
	/// Type 7.
	PaintKitOperation(PaintKitOperation),
	/// Type 8.
	PaintKitItemDefinition(PaintKitItemDefinition),
	/// Type 9.
	PaintKitDefinition(PaintKitDefinition),
	/// Type 10.
	HeaderOnly(HeaderOnly),
}

impl DefMessage {
	/// Decode `payload` as the message shape selected by `kind`.
	pub fn decode(kind: DefKind, payload: &[u8]) -> Result<Self, prost::DecodeError> {
		Ok(match kind {
			DefKind::PaintKitOperation => Self::PaintKitOperation(PaintKitOperation::decode(payload)?),
			DefKind::PaintKitItemDefinition => Self::PaintKitItemDefinition(PaintKitItemDefinition::decode(payload)?),
			DefKind::PaintKitDefinition => Self::PaintKitDefinition(PaintKitDefinition::decode(payload)?),
			DefKind::HeaderOnly => Self::HeaderOnly(HeaderOnly::decode(payload)?),
		})
	}

	/// Schema variant of this message.
	pub fn kind(&self) -> DefKind {
		match self {
			Self::PaintKitOperation(_) => DefKind::PaintKitOperation,
			Self::PaintKitItemDefinition(_) => DefKind::PaintKitItemDefinition,
			Self::PaintKitDefinition(_) => DefKind::PaintKitDefinition,
			Self::HeaderOnly(_) => DefKind::HeaderOnly,
		}
	}

	/// Definition header, when the payload carried one.
	pub fn header(&self) -> Option<&ProtoDefHeader> {
		match self {
			Self::PaintKitOperation(msg) => msg.header.as_ref(),
			Self::PaintKitItemDefinition(msg) => msg.header.as_ref(),
			Self::PaintKitDefinition(msg) => msg.header.as_ref(),
			Self::HeaderOnly(msg) => msg.header.as_ref(),
		}
	}

	/// Header definition index; 0 when the header or its index is absent.
	pub fn definition_index(&self) -> u32 {
		self.header().and_then(|header| header.defindex).unwrap_or(0)
	}
}

impl Serialize for DefMessage {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Self::PaintKitOperation(msg) => msg.serialize(serializer),
			Self::PaintKitItemDefinition(msg) => msg.serialize(serializer),
			Self::PaintKitDefinition(msg) => msg.serialize(serializer),
			Self::HeaderOnly(msg) => msg.serialize(serializer),
		}
	}
}
