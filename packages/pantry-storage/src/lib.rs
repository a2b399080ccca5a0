pub mod memory;
pub mod seed;

mod error;

pub use error::Error;
pub use memory::MemoryStore;

pub type Result<T, E = Error> = std::result::Result<T, E>;

use pantry_domain::{QueryPage, Recipe, RecipeDraft, RecipeId, RecipePatch, RecipeQuery};

/// Recipe persistence.
///
/// Mutations are serialized. A read observes the collection either before or after a mutation,
/// never in between.
pub trait RecipeStore: Send + Sync {
	fn find_by_id(&self, id: RecipeId) -> Result<Recipe>;

	/// Positional window over the collection in insertion order, without filtering. `total` is
	/// the collection size seen by the same read.
	fn find_all(&self, offset: usize, limit: usize) -> QueryPage;

	fn find_with_query(&self, query: &RecipeQuery) -> QueryPage;

	/// Stores `draft` under the next identifier and returns the stored record.
	fn create(&self, draft: RecipeDraft) -> Result<Recipe>;

	/// Merges the fields `patch` sets into the record stored under `id`.
	fn update(&self, id: RecipeId, patch: RecipePatch) -> Result<Recipe>;

	/// Removes the record stored under `id` and returns it.
	fn delete(&self, id: RecipeId) -> Result<Recipe>;

	fn len(&self) -> usize;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
