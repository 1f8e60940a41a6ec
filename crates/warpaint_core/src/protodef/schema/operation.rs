use serde::Serialize;

use super::{ProtoDefId, VarBool, VarFloat, VarString, VarUint32};

/// One node of a compositing tree: an inline stage or a reference to another operation.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct OperationNode {
	/// Node payload; absent when unset.
	#[prost(oneof = "operation_node::NodeType", tags = "1, 2")]
	#[serde(flatten)]
	pub node_type: Option<operation_node::NodeType>,
}

/// Oneof payload of [`OperationNode`].
pub mod operation_node {
	/// Inline stage or template reference.
	#[derive(Clone, PartialEq, prost::Oneof, serde::Serialize)]
	#[serde(rename_all = "snake_case")]
	pub enum NodeType {
		/// Stage evaluated in place.
		#[prost(message, tag = "1")]
		Stage(super::OperationStage),
		/// Reference to a `PaintKitOperation` definition.
		#[prost(message, tag = "2")]
		OperationTemplate(super::ProtoDefId),
	}
}

/// A single compositing step.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct OperationStage {
	/// Stage payload; absent when unset.
	#[prost(oneof = "operation_stage::Stage", tags = "1, 2, 3, 4, 5, 6")]
	#[serde(flatten)]
	pub stage: Option<operation_stage::Stage>,
}

/// Oneof payload of [`OperationStage`].
pub mod operation_stage {
	/// Stage kinds.
	#[derive(Clone, PartialEq, prost::Oneof, serde::Serialize)]
	#[serde(rename_all = "snake_case")]
	pub enum Stage {
		/// Sample a texture.
		#[prost(message, tag = "1")]
		Texture(super::TextureStage),
		/// Add child results.
		#[prost(message, tag = "2")]
		CombineAdd(super::CombineStage),
		/// Interpolate child results.
		#[prost(message, tag = "3")]
		CombineLerp(super::CombineStage),
		/// Multiply child results.
		#[prost(message, tag = "4")]
		CombineMultiply(super::CombineStage),
		/// Select texture groups by mask.
		#[prost(message, tag = "5")]
		Select(super::SelectStage),
		/// Apply stickers.
		#[prost(message, tag = "6")]
		ApplySticker(super::StickerStage),
	}
}

/// Texture sampling stage.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct TextureStage {
	/// Texture path.
	#[prost(message, optional, tag = "1")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub texture: Option<VarString>,
	/// Red team texture path.
	#[prost(message, optional, tag = "2")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub texture_red: Option<VarString>,
	/// Blue team texture path.
	#[prost(message, optional, tag = "3")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub texture_blue: Option<VarString>,
	/// Black level adjustment.
	#[prost(message, optional, tag = "4")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub adjust_black: Option<VarFloat>,
	/// Offset adjustment.
	#[prost(message, optional, tag = "5")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub adjust_offset: Option<VarFloat>,
	/// Gamma adjustment.
	#[prost(message, optional, tag = "6")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub adjust_gamma: Option<VarFloat>,
	/// Rotation in degrees.
	#[prost(message, optional, tag = "7")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub rotation: Option<VarFloat>,
	/// Horizontal translation.
	#[prost(message, optional, tag = "8")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub translate_u: Option<VarFloat>,
	/// Vertical translation.
	#[prost(message, optional, tag = "9")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub translate_v: Option<VarFloat>,
	/// Uniform UV scale.
	#[prost(message, optional, tag = "10")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub scale_uv: Option<VarFloat>,
	/// Mirror horizontally.
	#[prost(message, optional, tag = "11")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub flip_u: Option<VarBool>,
	/// Mirror vertically.
	#[prost(message, optional, tag = "12")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub flip_v: Option<VarBool>,
}

/// Stage combining the results of its child nodes.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct CombineStage {
	/// Black level adjustment.
	#[prost(message, optional, tag = "1")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub adjust_black: Option<VarFloat>,
	/// Offset adjustment.
	#[prost(message, optional, tag = "2")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub adjust_offset: Option<VarFloat>,
	/// Gamma adjustment.
	#[prost(message, optional, tag = "3")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub adjust_gamma: Option<VarFloat>,
	/// Rotation in degrees.
	#[prost(message, optional, tag = "4")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub rotation: Option<VarFloat>,
	/// Horizontal translation.
	#[prost(message, optional, tag = "5")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub translate_u: Option<VarFloat>,
	/// Vertical translation.
	#[prost(message, optional, tag = "6")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub translate_v: Option<VarFloat>,
	/// Uniform UV scale.
	#[prost(message, optional, tag = "7")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub scale_uv: Option<VarFloat>,
	/// Mirror horizontally.
	#[prost(message, optional, tag = "8")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub flip_u: Option<VarBool>,
	/// Mirror vertically.
	#[prost(message, optional, tag = "9")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub flip_v: Option<VarBool>,
	/// Child nodes.
	#[prost(message, repeated, tag = "10")]
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub operation: Vec<OperationNode>,
}

/// Stage selecting texture groups by mask value.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct SelectStage {
	/// Group mask texture.
	#[prost(message, optional, tag = "1")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub groups: Option<VarString>,
	/// Selected group values.
	#[prost(message, repeated, tag = "2")]
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub select: Vec<VarUint32>,
}

/// One sticker candidate.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct Sticker {
	/// Base texture.
	#[prost(message, optional, tag = "1")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub base: Option<VarString>,
	/// Selection weight.
	#[prost(message, optional, tag = "2")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub weight: Option<VarFloat>,
	/// Specular texture.
	#[prost(message, optional, tag = "3")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub spec: Option<VarString>,
}

/// Stage placing one sticker chosen from candidates.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct StickerStage {
	/// Sticker candidates.
	#[prost(message, repeated, tag = "1")]
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub sticker: Vec<Sticker>,
	/// Top-left destination corner (u, v).
	#[prost(message, repeated, tag = "2")]
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub dest_tl: Vec<VarFloat>,
	/// Top-right destination corner (u, v).
	#[prost(message, repeated, tag = "3")]
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub dest_tr: Vec<VarFloat>,
	/// Bottom-left destination corner (u, v).
	#[prost(message, repeated, tag = "4")]
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub dest_bl: Vec<VarFloat>,
	/// Black level adjustment.
	#[prost(message, optional, tag = "5")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub adjust_black: Option<VarFloat>,
	/// Offset adjustment.
	#[prost(message, optional, tag = "6")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub adjust_offset: Option<VarFloat>,
	/// Gamma adjustment.
	#[prost(message, optional, tag = "7")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub adjust_gamma: Option<VarFloat>,
}
