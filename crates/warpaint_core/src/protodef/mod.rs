mod block;
mod bytes;
mod defmap;
mod error;
mod extract;
mod file;
mod kind;
mod message;
mod reader;
mod schema;

/// Block and record views plus the sequential block iterator.
pub use block::{Block, BlockIter};
/// Bounded little-endian cursor.
pub use bytes::Cursor;
/// Two-level result map and its JSON rendering.
pub use defmap::{DefMap, write_json};
/// Error and result aliases.
pub use error::{ProtoDefError, Result};
/// Single-pass extraction entry point.
pub use extract::extract_defs;
/// File abstraction and scan statistics.
pub use file::{ProtoDefFile, ScanStats, TypeStats};
/// Record dispatch table.
pub use kind::{DefKind, Dispatch};
/// Decoded message union.
pub use message::DefMessage;
/// Block header and record primitives.
pub use reader::{BlockHeader, Record, read_block_header, read_record};
/// Schema message types.
pub use schema::{
	CombineStage, HeaderOnly, ItemDefinitionTemplate, OperationNode, OperationStage, PaintKitDefinition, PaintKitDefinitionItem, PaintKitItemDefinition,
	PaintKitOperation, ProtoDefHeader, ProtoDefId, ProtoDefType, SelectStage, Sticker, StickerStage, TextureStage, VarBool, VarFloat, VarString, VarUint32,
	VariableDefinition, operation_node, operation_stage, var_bool, var_float, var_string, var_uint32,
};
