pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod search;
pub mod update;

mod error;

pub use error::{Error, Result};
pub use list::{ListRequest, ListResponse};
pub use search::SearchResponse;

use std::sync::Arc;

use pantry_config::Config;
use pantry_storage::{MemoryStore, RecipeStore, seed};

/// Recipe operations over a shared store. Cloning is cheap and every clone sees the same
/// records.
#[derive(Clone)]
pub struct PantryService {
	pub store: Arc<dyn RecipeStore>,
}
impl PantryService {
	pub fn new(store: Arc<dyn RecipeStore>) -> Self {
		Self { store }
	}

	/// Builds the store named by `cfg`: seeded from `storage.seed_path` when set, empty otherwise.
	pub fn from_config(cfg: &Config) -> Result<Self> {
		let store = match cfg.storage.seed_path.as_deref() {
			Some(path) => seed::load(path)?,
			None => {
				tracing::info!("No seed configured. Starting with an empty recipe store.");

				MemoryStore::new()
			},
		};

		Ok(Self::new(Arc::new(store)))
	}
}
