//! Public library API for extracting paint kit definitions from `proto_defs` containers.

/// Container scanning, record dispatch, schema decoding, and result aggregation.
pub mod protodef;
