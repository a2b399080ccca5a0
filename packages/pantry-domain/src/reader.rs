use crate::{
	input::{InputMap, InputValue},
	validation::ValidationErrors,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Presence {
	Required,
	Optional,
}

/// Reads typed fields out of an [`InputMap`], recording a failure for every field that does
/// not fit instead of stopping at the first one.
pub(crate) struct FieldReader<'a> {
	input: &'a InputMap,
	errors: ValidationErrors,
}
impl<'a> FieldReader<'a> {
	pub(crate) fn new(input: &'a InputMap) -> Self {
		Self { input, errors: ValidationErrors::default() }
	}

	pub(crate) fn fail(&mut self, path: impl Into<String>, message: impl Into<String>) {
		self.errors.push(path, message);
	}

	pub(crate) fn text(&mut self, field: &str, presence: Presence) -> Option<&'a str> {
		match self.value(field, presence)? {
			InputValue::Text(text) => Some(text.as_str()),
			other => {
				self.type_mismatch(field, "string", other);

				None
			},
		}
	}

	/// Text that must contain at least one character.
	pub(crate) fn non_empty_text(
		&mut self,
		field: &str,
		presence: Presence,
		message: &str,
	) -> Option<String> {
		let text = self.text(field, presence)?;

		if text.is_empty() {
			self.fail(field, message);

			return None;
		}

		Some(text.to_string())
	}

	pub(crate) fn number(&mut self, field: &str, presence: Presence) -> Option<f64> {
		match self.value(field, presence)? {
			InputValue::Number(number) if number.is_finite() => Some(*number),
			other => {
				self.type_mismatch(field, "number", other);

				None
			},
		}
	}

	pub(crate) fn integer(&mut self, field: &str, presence: Presence) -> Option<f64> {
		let number = self.number(field, presence)?;

		if number.fract() != 0.0 {
			self.fail(field, "Expected integer, received float");

			return None;
		}

		Some(number)
	}

	/// Integer within `min..=u32::MAX`, using the generic bound messages.
	pub(crate) fn bounded_u32(&mut self, field: &str, presence: Presence, min: u32) -> Option<u32> {
		let number = self.integer(field, presence)?;

		if number < f64::from(min) {
			self.fail(field, format!("Number must be greater than or equal to {min}"));

			return None;
		}
		if number > f64::from(u32::MAX) {
			self.fail(field, format!("Number must be less than or equal to {}", u32::MAX));

			return None;
		}

		Some(number as u32)
	}

	/// Text restricted to a closed set of literals.
	pub(crate) fn choice(
		&mut self,
		field: &str,
		presence: Presence,
		options: &[&str],
	) -> Option<&'a str> {
		let expected =
			options.iter().map(|option| format!("'{option}'")).collect::<Vec<_>>().join(" | ");

		match self.value(field, presence)? {
			InputValue::Text(text) if options.contains(&text.as_str()) => Some(text.as_str()),
			InputValue::Text(text) => {
				self.fail(
					field,
					format!("Invalid enum value. Expected {expected}, received '{text}'"),
				);

				None
			},
			other => {
				self.type_mismatch(field, &expected, other);

				None
			},
		}
	}

	/// List of strings. Element failures are reported under `field.<index>`.
	pub(crate) fn text_list(&mut self, field: &str, presence: Presence) -> Option<Vec<&'a str>> {
		let items = match self.value(field, presence)? {
			InputValue::List(items) => items,
			other => {
				self.type_mismatch(field, "array", other);

				return None;
			},
		};
		let mut texts = Vec::with_capacity(items.len());
		let mut valid = true;

		for (index, item) in items.iter().enumerate() {
			match item {
				InputValue::Text(text) => texts.push(text.as_str()),
				other => {
					self.type_mismatch(&format!("{field}.{index}"), "string", other);

					valid = false;
				},
			}
		}

		valid.then_some(texts)
	}

	/// Hands back `value` when no failure was recorded.
	///
	/// Every field that yields `None` records a failure first, so an error-free reader with a
	/// missing value means a field parser broke that contract.
	pub(crate) fn finish<T>(self, value: Option<T>) -> Result<T, ValidationErrors> {
		if !self.errors.is_empty() {
			return Err(self.errors);
		}

		match value {
			Some(value) => Ok(value),
			None => unreachable!("a field parser returned no value without recording a failure"),
		}
	}

	fn value(&mut self, field: &str, presence: Presence) -> Option<&'a InputValue> {
		let value = self.input.get(field);

		if value.is_none() && presence == Presence::Required {
			self.fail(field, "Required");
		}

		value
	}

	fn type_mismatch(&mut self, path: &str, expected: &str, received: &InputValue) {
		self.fail(path, format!("Expected {expected}, received {}", received.kind()));
	}
}
