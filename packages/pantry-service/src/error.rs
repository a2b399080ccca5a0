use pantry_domain::ValidationErrors;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {0}")]
	Validation(ValidationErrors),
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<ValidationErrors> for Error {
	fn from(errors: ValidationErrors) -> Self {
		Self::Validation(errors)
	}
}

impl From<pantry_storage::Error> for Error {
	fn from(err: pantry_storage::Error) -> Self {
		match err {
			pantry_storage::Error::NotFound { .. } => Self::NotFound { message: err.to_string() },
			other => Self::Storage { message: other.to_string() },
		}
	}
}
