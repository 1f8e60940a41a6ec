use warpaint_testkit::ContainerBuilder;

use crate::protodef::{BlockHeader, BlockIter, ProtoDefError, read_block_header, read_record};

#[test]
fn empty_container_has_no_blocks() {
	let mut iter = BlockIter::new(&[]);
	assert!(iter.next().is_none());
}

#[test]
fn blocks_tile_the_container_exactly() {
	let bytes = ContainerBuilder::new()
		.block(9, &[b"one".as_slice(), b"three".as_slice()])
		.block(1234, &[b"x".as_slice()])
		.block(10, &[] as &[&[u8]])
		.build();

	let blocks: Vec<_> = BlockIter::new(&bytes).collect::<Result<_, _>>().expect("scan succeeds");
	assert_eq!(blocks.len(), 3);

	let mut expected_offset = 0;
	let mut covered = 0;
	for block in &blocks {
		assert_eq!(block.file_offset, expected_offset, "blocks must be contiguous");
		assert_eq!(block.records.len(), block.head.count as usize);
		covered += BlockHeader::SIZE;
		for record in &block.records {
			covered += 4 + record.payload.len();
		}
		expected_offset = block.end_offset;
	}
	assert_eq!(expected_offset, bytes.len());
	assert_eq!(covered, bytes.len());

	assert_eq!(blocks[0].head, BlockHeader { type_id: 9, count: 2 });
	assert_eq!(blocks[0].records[1].payload, b"three");
	assert_eq!(blocks[1].records[0].payload, b"x");
	assert!(blocks[2].records.is_empty());
}

#[test]
fn record_offsets_strictly_increase() {
	let bytes = ContainerBuilder::new()
		.block(7, &[b"".as_slice(), b"ab".as_slice(), b"".as_slice()])
		.build();

	let block = BlockIter::new(&bytes).next().expect("one block").expect("block parses");
	let offsets: Vec<_> = block.records.iter().map(|record| record.file_offset).collect();
	assert_eq!(offsets, vec![8, 12, 18]);
	assert_eq!(block.end_offset, 22);
}

#[test]
fn trailing_partial_header_fails_after_good_block() {
	let bytes = ContainerBuilder::new().block(9, &[b"ok".as_slice()]).raw(&[1, 2, 3]).build();

	let mut iter = BlockIter::new(&bytes);
	assert!(iter.next().expect("first item").is_ok());
	let err = iter.next().expect("second item").expect_err("partial header");
	assert!(matches!(err, ProtoDefError::UnexpectedEof { at: 14, need: 4, rem: 3 }), "got {err:?}");
	assert!(iter.next().is_none(), "iteration stops after an error");
}

#[test]
fn count_larger_than_records_present_fails() {
	let bytes = ContainerBuilder::new().block_header(8, 3).record(b"a").record(b"b").build();

	let err = BlockIter::new(&bytes).next().expect("one item").expect_err("third record missing");
	assert!(matches!(err, ProtoDefError::UnexpectedEof { at: 18, need: 4, rem: 0 }), "got {err:?}");
}

#[test]
fn huge_count_does_not_preallocate() {
	let bytes = ContainerBuilder::new().block_header(8, i32::MAX).build();

	let err = BlockIter::new(&bytes).next().expect("one item").expect_err("no records present");
	assert!(matches!(err, ProtoDefError::UnexpectedEof { at: 8, .. }), "got {err:?}");
}

#[test]
fn iterator_agrees_with_offset_reads() {
	let bytes = ContainerBuilder::new()
		.block(8, &[b"alpha".as_slice(), b"".as_slice()])
		.block(-3, &[b"omega".as_slice()])
		.build();

	let mut offset = 0;
	for block in BlockIter::new(&bytes) {
		let block = block.expect("block parses");
		let (head, mut next) = read_block_header(&bytes, offset).expect("header reads at block offset");
		assert_eq!(block.file_offset, offset);
		assert_eq!(block.head, head);
		for record in &block.records {
			let (read, after) = read_record(&bytes, next).expect("record reads at its offset");
			assert_eq!(*record, read);
			next = after;
		}
		assert_eq!(block.end_offset, next);
		offset = next;
	}
	assert_eq!(offset, bytes.len());
}
