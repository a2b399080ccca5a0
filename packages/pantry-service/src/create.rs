use pantry_domain::{InputMap, Recipe, RecipeDraft};

use crate::{PantryService, Result};

impl PantryService {
	/// Validates `input` as a complete recipe and stores it under a fresh identifier. An `id`
	/// key in the input is ignored.
	pub fn create(&self, input: &InputMap) -> Result<Recipe> {
		let draft = RecipeDraft::parse(input)?;
		let recipe = self.store.create(draft)?;

		tracing::info!(id = recipe.id, title = %recipe.title, "Created recipe.");

		Ok(recipe)
	}
}
