use serde::Serialize;

/// One violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{path}: {message}")]
pub struct FieldError {
	/// Dotted field path, e.g. `rating` or `ingredients.2`.
	pub path: String,
	pub message: String,
}

/// Every constraint violated by one input, in field declaration order.
///
/// Validators only return this type when at least one entry is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("{}", render(.0))]
pub struct ValidationErrors(Vec<FieldError>);
impl ValidationErrors {
	pub fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
		self.0.push(FieldError { path: path.into(), message: message.into() });
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
		self.0.iter()
	}

	/// True when any entry targets `field` itself or one of its elements.
	pub fn mentions(&self, field: &str) -> bool {
		self.0.iter().any(|error| {
			error.path == field
				|| error.path.strip_prefix(field).is_some_and(|rest| rest.starts_with('.'))
		})
	}

	/// `path: message` lines, one per entry.
	pub fn to_lines(&self) -> Vec<String> {
		self.0.iter().map(ToString::to_string).collect()
	}

	pub fn into_inner(self) -> Vec<FieldError> {
		self.0
	}
}
impl IntoIterator for ValidationErrors {
	type IntoIter = std::vec::IntoIter<FieldError>;
	type Item = FieldError;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

fn render(errors: &[FieldError]) -> String {
	errors.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}
