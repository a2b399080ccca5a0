use pantry_domain::{Recipe, RecipeId};

use crate::{PantryService, Result};

impl PantryService {
	pub fn get(&self, id: RecipeId) -> Result<Recipe> {
		let recipe = self.store.find_by_id(id)?;

		tracing::debug!(id, "Fetched recipe.");

		Ok(recipe)
	}
}
