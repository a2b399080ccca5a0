//! Untyped request input, before validation.
//!
//! Query strings and JSON bodies both land in an [`InputMap`]. Validators read only the keys
//! they recognize; anything else in the map is ignored.

use std::collections::{BTreeMap, btree_map};

use serde_json::Value;

use crate::validation::ValidationErrors;

/// A single dynamically typed input value.
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
	Null,
	Bool(bool),
	Number(f64),
	Text(String),
	List(Vec<InputValue>),
	/// Nested objects are never valid for any recognized field, so only the kind is kept.
	Object,
}
impl InputValue {
	/// Type name used in validation messages.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "boolean",
			Self::Number(value) if value.is_nan() => "nan",
			Self::Number(_) => "number",
			Self::Text(_) => "string",
			Self::List(_) => "array",
			Self::Object => "object",
		}
	}

	fn coerce_number(&self) -> Option<Self> {
		let Self::Text(raw) = self else {
			return None;
		};

		if raw.is_empty() {
			return None;
		}

		let trimmed = raw.trim();

		// Whitespace-only text reads as zero.
		if trimmed.is_empty() {
			return Some(Self::Number(0.0));
		}

		trimmed.parse::<f64>().ok().filter(|value| value.is_finite()).map(Self::Number)
	}
}
impl From<Value> for InputValue {
	fn from(value: Value) -> Self {
		match value {
			Value::Null => Self::Null,
			Value::Bool(flag) => Self::Bool(flag),
			Value::Number(number) => number.as_f64().map(Self::Number).unwrap_or(Self::Null),
			Value::String(text) => Self::Text(text),
			Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
			Value::Object(_) => Self::Object,
		}
	}
}
impl From<&str> for InputValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}
impl From<String> for InputValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}
impl From<f64> for InputValue {
	fn from(value: f64) -> Self {
		Self::Number(value)
	}
}
impl From<i64> for InputValue {
	fn from(value: i64) -> Self {
		Self::Number(value as f64)
	}
}
impl From<bool> for InputValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}
impl<T> From<Vec<T>> for InputValue
where
	T: Into<InputValue>,
{
	fn from(items: Vec<T>) -> Self {
		Self::List(items.into_iter().map(Into::into).collect())
	}
}

/// String-keyed request input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputMap {
	entries: BTreeMap<String, InputValue>,
}
impl InputMap {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a map from a parsed JSON body. The body must be an object.
	pub fn from_json(value: Value) -> Result<Self, ValidationErrors> {
		match value {
			Value::Object(fields) => Ok(Self {
				entries: fields.into_iter().map(|(key, value)| (key, value.into())).collect(),
			}),
			other => {
				let mut errors = ValidationErrors::default();

				errors.push(
					"(root)",
					format!("Expected object, received {}", InputValue::from(other).kind()),
				);

				Err(errors)
			},
		}
	}

	/// Builds a map from decoded query-string pairs. Every value is text; a key that appears
	/// more than once collects its values into a list.
	pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		let mut entries: BTreeMap<String, InputValue> = BTreeMap::new();

		for (key, value) in pairs {
			let value = InputValue::Text(value.into());

			match entries.entry(key.into()) {
				btree_map::Entry::Vacant(slot) => {
					slot.insert(value);
				},
				btree_map::Entry::Occupied(mut slot) => match slot.get_mut() {
					InputValue::List(items) => items.push(value),
					existing => {
						let first = std::mem::replace(existing, InputValue::Null);

						*existing = InputValue::List(vec![first, value]);
					},
				},
			}
		}

		Self { entries }
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<InputValue>) {
		self.entries.insert(key.into(), value.into());
	}

	pub fn with(mut self, key: impl Into<String>, value: impl Into<InputValue>) -> Self {
		self.insert(key, value);

		self
	}

	pub fn get(&self, key: &str) -> Option<&InputValue> {
		self.entries.get(key)
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns a copy in which the listed fields holding numeric text are converted to
	/// numbers. Text that does not parse is left as is so it fails type validation later.
	pub fn coerce_numbers(&self, fields: &[&str]) -> Self {
		let mut coerced = self.clone();

		for field in fields {
			if let Some(value) = coerced.entries.get_mut(*field)
				&& let Some(number) = value.coerce_number()
			{
				*value = number;
			}
		}

		coerced
	}

	/// Keys present in the map that are not in `known`.
	pub(crate) fn unknown_keys<'a>(&'a self, known: &'a [&'a str]) -> Vec<&'a str> {
		self.keys().filter(|key| !known.contains(key)).collect()
	}
}
impl<K, V> FromIterator<(K, V)> for InputMap
where
	K: Into<String>,
	V: Into<InputValue>,
{
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		let entries = iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect();

		Self { entries }
	}
}
