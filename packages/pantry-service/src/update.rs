use pantry_domain::{InputMap, InputValue, Recipe, RecipeId, RecipePatch};

use crate::{PantryService, Result};

impl PantryService {
	/// Applies a partial update to the record stored under `id`. `id` replaces any `id` key in
	/// `input` before validation.
	pub fn update(&self, id: RecipeId, input: &InputMap) -> Result<Recipe> {
		let input = input.clone().with("id", InputValue::Number(id as f64));
		let patch = RecipePatch::parse(&input)?;

		if patch.is_empty() {
			tracing::debug!(id, "Update carries no fields.");
		}

		let recipe = self.store.update(id, patch)?;

		tracing::info!(id, "Updated recipe.");

		Ok(recipe)
	}
}
