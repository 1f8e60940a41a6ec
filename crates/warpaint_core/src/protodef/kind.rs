use crate::protodef::ProtoDefType;

/// Schema variants the extractor knows how to decode.
///
/// Discriminants index into the registry, which pairs each variant with its
/// block type id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefKind {
	/// `PaintKitOperation` records.
	PaintKitOperation = 0,
	/// `PaintKitItemDefinition` records.
	PaintKitItemDefinition = 1,
	/// `PaintKitDefinition` records.
	PaintKitDefinition = 2,
	/// `HeaderOnly` records.
	HeaderOnly = 3,
}

/// Block type id to schema variant registry.
const REGISTRY: [(ProtoDefType, DefKind); 4] = [
	(ProtoDefType::PaintKitOperation, DefKind::PaintKitOperation),
	(ProtoDefType::PaintKitItemDefinition, DefKind::PaintKitItemDefinition),
	(ProtoDefType::PaintKitDefinition, DefKind::PaintKitDefinition),
	(ProtoDefType::HeaderOnly, DefKind::HeaderOnly),
];

const _: () = {
	let mut idx = 0;
	while idx < REGISTRY.len() {
		assert!(REGISTRY[idx].1 as usize == idx, "registry order must follow DefKind discriminants");
		idx += 1;
	}
};

impl DefKind {
	/// Every registered variant, in registry order.
	pub fn all() -> impl Iterator<Item = DefKind> {
		REGISTRY.iter().map(|(_, kind)| *kind)
	}

	/// Block type id that selects this variant.
	pub fn type_id(self) -> i32 {
		REGISTRY[self as usize].0 as i32
	}

	/// Stable label used in logs and error messages.
	pub fn label(self) -> &'static str {
		match self {
			DefKind::PaintKitOperation => "paintkit_operation",
			DefKind::PaintKitItemDefinition => "paintkit_item_definition",
			DefKind::PaintKitDefinition => "paintkit_definition",
			DefKind::HeaderOnly => "header_only",
		}
	}
}

/// What to do with the records of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
	/// Decode every record as the given variant.
	Decode(DefKind),
	/// Consume records without decoding them.
	Skip,
}

impl Dispatch {
	/// Resolve the dispatch decision for a block type id.
	pub fn for_type(type_id: i32) -> Self {
		REGISTRY
			.iter()
			.find(|(def_type, _)| *def_type as i32 == type_id)
			.map_or(Dispatch::Skip, |(_, kind)| Dispatch::Decode(*kind))
	}

	/// Return `true` when records will be decoded.
	pub fn is_decode(self) -> bool {
		matches!(self, Dispatch::Decode(_))
	}
}
