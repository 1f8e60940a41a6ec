use serde::Serialize;

/// Named paint kit variable with an optional default value.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct VariableDefinition {
	/// Variable name, referenced as `variable` by the `Var*` values.
	#[prost(string, optional, tag = "1")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Inherit the value from the enclosing definition.
	#[prost(bool, optional, tag = "2")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub inherit: Option<bool>,
	/// Value as text.
	#[prost(string, optional, tag = "3")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub value: Option<String>,
}

/// Boolean that is either literal or bound to a variable.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct VarBool {
	/// Literal value or variable name; absent when unset.
	#[prost(oneof = "var_bool::Value", tags = "1, 2")]
	#[serde(flatten)]
	pub value: Option<var_bool::Value>,
}

/// Oneof payload of [`VarBool`].
pub mod var_bool {
	/// Literal or variable-bound value.
	#[derive(Clone, PartialEq, prost::Oneof, serde::Serialize)]
	#[serde(rename_all = "snake_case")]
	pub enum Value {
		/// Literal value.
		#[prost(bool, tag = "1")]
		Value(bool),
		/// Name of the variable supplying the value.
		#[prost(string, tag = "2")]
		Variable(String),
	}
}

/// Float that is either literal or bound to a variable.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct VarFloat {
	/// Literal value or variable name; absent when unset.
	#[prost(oneof = "var_float::Value", tags = "1, 2")]
	#[serde(flatten)]
	pub value: Option<var_float::Value>,
}

/// Oneof payload of [`VarFloat`].
pub mod var_float {
	/// Literal or variable-bound value.
	#[derive(Clone, PartialEq, prost::Oneof, serde::Serialize)]
	#[serde(rename_all = "snake_case")]
	pub enum Value {
		/// Literal value.
		#[prost(float, tag = "1")]
		Value(f32),
		/// Name of the variable supplying the value.
		#[prost(string, tag = "2")]
		Variable(String),
	}
}

/// Unsigned integer that is either literal or bound to a variable.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct VarUint32 {
	/// Literal value or variable name; absent when unset.
	#[prost(oneof = "var_uint32::Value", tags = "1, 2")]
	#[serde(flatten)]
	pub value: Option<var_uint32::Value>,
}

/// Oneof payload of [`VarUint32`].
pub mod var_uint32 {
	/// Literal or variable-bound value.
	#[derive(Clone, PartialEq, prost::Oneof, serde::Serialize)]
	#[serde(rename_all = "snake_case")]
	pub enum Value {
		/// Literal value.
		#[prost(uint32, tag = "1")]
		Value(u32),
		/// Name of the variable supplying the value.
		#[prost(string, tag = "2")]
		Variable(String),
	}
}

/// String that is either literal or bound to a variable.
#[derive(Clone, PartialEq, prost::Message, Serialize)]
pub struct VarString {
	/// Literal value or variable name; absent when unset.
	#[prost(oneof = "var_string::Value", tags = "1, 2")]
	#[serde(flatten)]
	pub value: Option<var_string::Value>,
}

/// Oneof payload of [`VarString`].
pub mod var_string {
	/// Literal or variable-bound value.
	#[derive(Clone, PartialEq, prost::Oneof, serde::Serialize)]
	#[serde(rename_all = "snake_case")]
	pub enum Value {
		/// Literal value.
		#[prost(string, tag = "1")]
		Value(String),
		/// Name of the variable supplying the value.
		#[prost(string, tag = "2")]
		Variable(String),
	}
}
