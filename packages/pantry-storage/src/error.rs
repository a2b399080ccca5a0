use std::path::PathBuf;

use pantry_domain::RecipeId;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Recipe with id {id} not found.")]
	NotFound { id: RecipeId },
	#[error("Conflict: {0}")]
	Conflict(String),
	#[error("Invalid seed file {path:?}: {message}")]
	Seed { path: PathBuf, message: String },
	#[error("Failed to read seed file at {path:?}.")]
	ReadSeed {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}
