//! Seed documents.
//!
//! A seed file is JSON holding either an array of recipes or an object with a `recipes` array.
//! Every record must pass the same field rules as a create request and carry a positive `id`.

use std::{
	fs,
	path::{Path, PathBuf},
};

use serde::Deserialize;
use serde_json::Value;

use pantry_domain::{InputMap, Recipe};

use crate::{Error, MemoryStore, RecipeStore, Result};

#[derive(Deserialize)]
#[serde(untagged)]
enum SeedDocument {
	Records(Vec<Value>),
	Wrapped { recipes: Vec<Value> },
}
impl SeedDocument {
	fn into_records(self) -> Vec<Value> {
		match self {
			Self::Records(records) | Self::Wrapped { recipes: records } => records,
		}
	}
}

/// Reads `path` and builds a store over its records.
pub fn load(path: &Path) -> Result<MemoryStore> {
	let text = fs::read_to_string(path)
		.map_err(|source| Error::ReadSeed { path: path.to_path_buf(), source })?;
	let records = parse(path, &text)?;
	let store = MemoryStore::with_records(records)?;

	tracing::info!(path = %path.display(), count = store.len(), "Loaded recipe seed.");

	Ok(store)
}

/// Parses and validates a seed document. `path` only labels errors.
pub fn parse(path: &Path, text: &str) -> Result<Vec<Recipe>> {
	let document: SeedDocument =
		serde_json::from_str(text).map_err(|err| seed_error(path, err.to_string()))?;

	document
		.into_records()
		.into_iter()
		.enumerate()
		.map(|(index, value)| {
			InputMap::from_json(value)
				.and_then(|input| Recipe::from_input(&input))
				.map_err(|errors| seed_error(path, format!("record {index}: {errors}")))
		})
		.collect()
}

fn seed_error(path: &Path, message: String) -> Error {
	Error::Seed { path: PathBuf::from(path), message }
}
