//! Message shapes for the paint kit records stored in `proto_defs` containers.
//!
//! Field numbers follow the game's `tf_proto_def_messages.proto`. Every message
//! reachable from the four registered record types is declared, so decoded
//! records render without losing fields.

use serde::Serialize;

mod operation;
mod value;

pub use operation::{
	CombineStage, OperationNode, OperationStage, SelectStage, Sticker, StickerStage, TextureStage, operation_node, operation_stage,
};
pub use value::{VarBool, VarFloat, VarString, VarUint32, VariableDefinition, var_bool, var_float, var_string, var_uint32};

/// Definition categories known to the game's protobuf definitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum ProtoDefType {
	/// Quest map node.
	QuestMapNode = 0,
	/// Quest theme.
	QuestTheme = 2,
	/// Quest map region.
	QuestMapRegion = 3,
	/// Quest.
	Quest = 4,
	/// Quest objective.
	QuestObjective = 5,
	/// Paint kit variables.
	PaintKitVariables = 6,
	/// Paint kit operation.
	PaintKitOperation = 7,
	/// Paint kit item definition.
	PaintKitItemDefinition = 8,
	/// Paint kit definition.
	PaintKitDefinition = 9,
	/// Header-only definition.
	HeaderOnly = 10,
	/// Quest map store item.
	QuestMapStoreItem = 11,
	/// Quest map star type.
	QuestMapStarType = 12,
}

/// Typed reference to another definition.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct ProtoDefId {
	/// Referenced definition category, as its raw enum value.
	#[prost(enumeration = "ProtoDefType", optional, tag = "1")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub r#type: Option<i32>,
	/// Referenced definition index.
	#[prost(uint32, optional, tag = "2")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub defindex: Option<u32>,
}

/// Header carried by every definition message.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct ProtoDefHeader {
	/// Definition index; the inner key of the output document.
	#[prost(uint32, optional, tag = "1")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub defindex: Option<u32>,
	/// Internal definition name.
	#[prost(string, optional, tag = "2")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Prefabs this definition inherits from.
	#[prost(message, repeated, tag = "3")]
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub prefabs: Vec<ProtoDefId>,
	/// Free-form tags.
	#[prost(string, repeated, tag = "4")]
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub tags: Vec<String>,
	/// Set on definitions that only exist to be inherited.
	#[prost(bool, optional, tag = "5")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub prefab_only: Option<bool>,
}

/// Paint kit compositing operation (type 7).
#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct PaintKitOperation {
	/// Shared definition header.
	#[prost(message, optional, tag = "1")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub header: Option<ProtoDefHeader>,
	/// Root nodes of the compositing tree.
	#[prost(message, repeated, tag = "2")]
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub operation_node: Vec<OperationNode>,
}

/// Per-item paint kit binding (type 8).
#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct PaintKitItemDefinition {
	/// Shared definition header.
	#[prost(message, optional, tag = "1")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub header: Option<ProtoDefHeader>,
	/// Item definition index the binding applies to.
	#[prost(uint32, optional, tag = "2")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub item_definition_index: Option<u32>,
	/// Operation templates used to paint the item.
	#[prost(message, repeated, tag = "3")]
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub definition: Vec<ItemDefinitionTemplate>,
}

/// One operation template reference inside an item binding.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct ItemDefinitionTemplate {
	/// Referenced `PaintKitOperation` definition.
	#[prost(message, optional, tag = "1")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub operation_template: Option<ProtoDefId>,
	/// Variable values passed to the template.
	#[prost(message, repeated, tag = "2")]
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub variable: Vec<VariableDefinition>,
}

/// Paint kit definition (type 9).
#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct PaintKitDefinition {
	/// Shared definition header.
	#[prost(message, optional, tag = "1")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub header: Option<ProtoDefHeader>,
	/// Localization token for the paint kit description.
	#[prost(string, optional, tag = "2")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub loc_desctoken: Option<String>,
	/// Operation applied when no item-specific template exists.
	#[prost(message, optional, tag = "3")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub operation_template: Option<ProtoDefId>,
	/// Whether red and blue team textures differ.
	#[prost(bool, optional, tag = "4")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub has_team_textures: Option<bool>,
	/// Item-specific bindings.
	#[prost(message, repeated, tag = "5")]
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub item: Vec<PaintKitDefinitionItem>,
	/// Variable values shared by every item.
	#[prost(message, repeated, tag = "6")]
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub variable: Vec<VariableDefinition>,
}

/// Item-specific binding inside a paint kit definition.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct PaintKitDefinitionItem {
	/// Referenced `PaintKitItemDefinition`.
	#[prost(message, optional, tag = "1")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub item_definition_template: Option<ProtoDefId>,
	/// Variable values for this item.
	#[prost(message, repeated, tag = "2")]
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub variable: Vec<VariableDefinition>,
}

/// Definition with nothing but a header (type 10).
#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct HeaderOnly {
	/// Shared definition header.
	#[prost(message, optional, tag = "1")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub header: Option<ProtoDefHeader>,
}
