use pantry_domain::{Recipe, RecipeId};

use crate::{PantryService, Result};

impl PantryService {
	/// Removes the record stored under `id` and returns it.
	pub fn delete(&self, id: RecipeId) -> Result<Recipe> {
		let recipe = self.store.delete(id)?;

		tracing::info!(id, remaining = self.store.len(), "Deleted recipe.");

		Ok(recipe)
	}
}
