use prost::Message;
use serde_json::json;
use warpaint_testkit::ContainerBuilder;

use crate::protodef::operation_node::NodeType;
use crate::protodef::operation_stage::Stage;
use crate::protodef::{
	CombineStage, DefKind, DefMessage, HeaderOnly, OperationNode, OperationStage, PaintKitDefinition, PaintKitItemDefinition, PaintKitOperation,
	ProtoDefError, ProtoDefHeader, ProtoDefId, TextureStage, VarBool, VarFloat, VarString, extract_defs, var_bool, var_float, var_string,
};

fn header(defindex: u32, name: &str) -> Option<ProtoDefHeader> {
	Some(ProtoDefHeader {
		defindex: Some(defindex),
		name: Some(name.to_owned()),
		..Default::default()
	})
}

fn header_only(defindex: u32, name: &str) -> Vec<u8> {
	HeaderOnly {
		header: header(defindex, name),
	}
	.encode_to_vec()
}

fn definition(defindex: u32, token: &str) -> Vec<u8> {
	PaintKitDefinition {
		header: header(defindex, "paintkit"),
		loc_desctoken: Some(token.to_owned()),
		..Default::default()
	}
	.encode_to_vec()
}

#[test]
fn empty_container_yields_empty_map() {
	let map = extract_defs(&[]).expect("empty container is well formed");
	assert!(map.is_empty());
}

#[test]
fn single_known_record_is_keyed_by_definition_index() {
	let bytes = ContainerBuilder::new().block(9, &[definition(42, "#TF_Paintkit_Warhawk")]).build();

	let map = extract_defs(&bytes).expect("extraction succeeds");
	let value = serde_json::to_value(&map).expect("map serializes");
	assert_eq!(
		value,
		json!({
			"9": {
				"42": {
					"header": { "defindex": 42, "name": "paintkit" },
					"loc_desctoken": "#TF_Paintkit_Warhawk"
				}
			}
		})
	);
}

#[test]
fn unregistered_block_is_skipped_and_cursor_advances() {
	let bytes = ContainerBuilder::new()
		.block(1234, &[b"\xFF\xFF garbage".as_slice(), b"more".as_slice()])
		.block(10, &[header_only(1, "after_skip")])
		.build();

	let map = extract_defs(&bytes).expect("unknown types are tolerated");
	assert!(map.messages_of(1234).is_none());
	assert_eq!(map.type_count(), 1);
	assert_eq!(map.get(10, 1).map(DefMessage::definition_index), Some(1));
}

#[test]
fn oversized_record_fails_whole_extraction() {
	let bytes = ContainerBuilder::new()
		.block(10, &[header_only(1, "ok")])
		.block_header(10, 1)
		.record_size(64)
		.raw(&header_only(2, "truncated"))
		.build();

	let err = extract_defs(&bytes).expect_err("declared size exceeds buffer");
	assert!(matches!(err, ProtoDefError::RecordOutOfRange { size: 64, .. }), "got {err:?}");
}

#[test]
fn oversized_record_in_skipped_block_still_fails() {
	let bytes = ContainerBuilder::new().block_header(77, 1).record_size(1000).raw(b"tiny").build();

	let err = extract_defs(&bytes).expect_err("bounds apply to skipped records too");
	assert!(matches!(err, ProtoDefError::RecordOutOfRange { at: 8, size: 1000, rem: 4 }), "got {err:?}");
}

#[test]
fn later_record_wins_within_a_block() {
	let bytes = ContainerBuilder::new()
		.block(10, &[header_only(5, "first"), header_only(6, "other"), header_only(5, "second")])
		.build();

	let map = extract_defs(&bytes).expect("extraction succeeds");
	assert_eq!(map.len(), 2);
	let kept = map.get(10, 5).and_then(DefMessage::header).and_then(|item| item.name.as_deref());
	assert_eq!(kept, Some("second"));
}

#[test]
fn later_record_wins_across_blocks_and_earlier_entries_survive() {
	let bytes = ContainerBuilder::new()
		.block(10, &[header_only(5, "first"), header_only(8, "kept")])
		.block(9, &[definition(5, "#other_type")])
		.block(10, &[header_only(5, "second")])
		.build();

	let map = extract_defs(&bytes).expect("extraction succeeds");
	let name_of = |type_id, index| map.get(type_id, index).and_then(DefMessage::header).and_then(|item| item.name.clone());
	assert_eq!(name_of(10, 5).as_deref(), Some("second"));
	assert_eq!(name_of(10, 8).as_deref(), Some("kept"));
	assert_eq!(map.get(9, 5).map(DefMessage::kind), Some(DefKind::PaintKitDefinition));
}

#[test]
fn every_registered_variant_is_decoded() {
	let operation = PaintKitOperation {
		header: header(1, "op"),
		..Default::default()
	}.encode_to_vec();
	let item = PaintKitItemDefinition {
		header: header(2, "item"),
		item_definition_index: Some(15),
		..Default::default()
	}
	.encode_to_vec();
	let bytes = ContainerBuilder::new()
		.block(7, &[operation])
		.block(8, &[item])
		.block(9, &[definition(3, "#def")])
		.block(10, &[header_only(4, "hdr")])
		.build();

	let map = extract_defs(&bytes).expect("extraction succeeds");
	assert_eq!(map.get(7, 1).map(DefMessage::kind), Some(DefKind::PaintKitOperation));
	assert_eq!(map.get(8, 2).map(DefMessage::kind), Some(DefKind::PaintKitItemDefinition));
	assert_eq!(map.get(9, 3).map(DefMessage::kind), Some(DefKind::PaintKitDefinition));
	assert_eq!(map.get(10, 4).map(DefMessage::kind), Some(DefKind::HeaderOnly));
}

#[test]
fn decode_failure_identifies_record() {
	let bytes = ContainerBuilder::new()
		.block(10, &[header_only(1, "fine"), vec![0x0A, 0x05, 0x08]])
		.build();

	let err = extract_defs(&bytes).expect_err("second record is malformed");
	let first_len = header_only(1, "fine").len();
	match err {
		ProtoDefError::Decode {
			type_id,
			kind,
			block,
			record,
			at,
			..
		} => {
			assert_eq!(type_id, 10);
			assert_eq!(kind, "header_only");
			assert_eq!(block, 0);
			assert_eq!(record, 1);
			assert_eq!(at, 8 + 4 + first_len + 4);
		}
		other => panic!("expected decode error, got {other:?}"),
	}
}

#[test]
fn malformed_payload_in_skipped_block_is_ignored() {
	let bytes = ContainerBuilder::new().block(6, &[vec![0x0A, 0x05, 0x08]]).build();

	let map = extract_defs(&bytes).expect("skipped records are never decoded");
	assert!(map.is_empty());
}

#[test]
fn zero_count_known_block_adds_no_type_key() {
	let bytes = ContainerBuilder::new().block(9, &[] as &[&[u8]]).build();

	let map = extract_defs(&bytes).expect("extraction succeeds");
	assert!(map.messages_of(9).is_none());
}

#[test]
fn trailing_bytes_after_last_block_fail() {
	let bytes = ContainerBuilder::new().block(10, &[header_only(1, "a")]).raw(&[0, 0, 0, 0]).build();

	let err = extract_defs(&bytes).expect_err("four stray bytes cannot form a header");
	assert!(matches!(err, ProtoDefError::UnexpectedEof { need: 4, rem: 0, .. }), "got {err:?}");
}

#[test]
fn nested_operation_tree_reaches_the_document() {
	let texture = TextureStage {
		texture: Some(VarString {
			value: Some(var_string::Value::Variable("$base".to_owned())),
		}),
		flip_u: Some(VarBool {
			value: Some(var_bool::Value::Value(true)),
		}),
		..Default::default()
	};
	let combine = CombineStage {
		adjust_gamma: Some(VarFloat {
			value: Some(var_float::Value::Value(0.5)),
		}),
		operation: vec![
			OperationNode {
				node_type: Some(NodeType::Stage(OperationStage {
					stage: Some(Stage::Texture(texture)),
				})),
			},
			OperationNode {
				node_type: Some(NodeType::OperationTemplate(ProtoDefId {
					r#type: Some(7),
					defindex: Some(12),
				})),
			},
		],
		..Default::default()
	};
	let operation = PaintKitOperation {
		header: header(1, "op"),
		operation_node: vec![OperationNode {
			node_type: Some(NodeType::Stage(OperationStage {
				stage: Some(Stage::CombineMultiply(combine)),
			})),
		}],
	}
	.encode_to_vec();
	let bytes = ContainerBuilder::new().block(7, &[operation]).build();

	let map = extract_defs(&bytes).expect("extraction succeeds");
	let value = serde_json::to_value(&map).expect("map serializes");
	assert_eq!(
		value,
		json!({
			"7": {
				"1": {
					"header": { "defindex": 1, "name": "op" },
					"operation_node": [{
						"stage": {
							"combine_multiply": {
								"adjust_gamma": { "value": 0.5 },
								"operation": [
									{ "stage": { "texture": { "texture": { "variable": "$base" }, "flip_u": { "value": true } } } },
									{ "operation_template": { "type": 7, "defindex": 12 } }
								]
							}
						}
					}]
				}
			}
		})
	);
}
