//! Shared fixtures for the pantry test suites.

use std::{path::Path, sync::Arc};

use serde_json::{Value, json};

use pantry_domain::{Difficulty, InputMap, Recipe, RecipeDraft};
use pantry_storage::{MemoryStore, RecipeStore, seed};

/// The bundled sample dataset, ten recipes with ids 1 through 10.
pub const SAMPLE_SEED_JSON: &str = include_str!("../../../seed/recipes.json");

pub fn sample_recipes() -> Vec<Recipe> {
	seed::parse(Path::new("seed/recipes.json"), SAMPLE_SEED_JSON)
		.expect("Bundled sample seed must be valid.")
}

pub fn sample_store() -> MemoryStore {
	MemoryStore::with_records(sample_recipes()).expect("Bundled sample seed must have unique ids.")
}

pub fn shared_sample_store() -> Arc<dyn RecipeStore> {
	Arc::new(sample_store())
}

/// Three records with cookTime 10, 20, 30 and titles C, A, B.
pub fn three_recipes() -> Vec<Recipe> {
	[("C", 10.0), ("A", 20.0), ("B", 30.0)]
		.into_iter()
		.zip(1..)
		.map(|((title, cook_time), id)| draft(title).cook_time(cook_time).build().into_recipe(id))
		.collect()
}

pub fn three_recipe_store() -> MemoryStore {
	MemoryStore::with_records(three_recipes()).expect("Fixture ids must be unique.")
}

/// A complete, valid create body.
pub fn recipe_body(title: &str) -> Value {
	json!({
		"title": title,
		"cuisine": "Italian",
		"difficulty": "Medium",
		"cookTime": 30,
		"servings": 4,
		"image": "https://images.example.com/recipes/test.jpg",
		"rating": 4.5,
		"ingredients": ["flour", "water", "salt"],
		"description": format!("{title}, made for the test suite."),
	})
}

pub fn recipe_input(title: &str) -> InputMap {
	InputMap::from_json(recipe_body(title)).expect("Recipe body must be an object.")
}

pub fn draft(title: &str) -> DraftBuilder {
	DraftBuilder::new(title)
}

/// Builder over a valid [`RecipeDraft`].
#[derive(Debug, Clone)]
pub struct DraftBuilder {
	draft: RecipeDraft,
}
impl DraftBuilder {
	pub fn new(title: &str) -> Self {
		Self {
			draft: RecipeDraft {
				title: title.to_string(),
				cuisine: "Italian".to_string(),
				difficulty: Difficulty::Medium,
				cook_time: 30.0,
				servings: 4.0,
				image: "https://images.example.com/recipes/test.jpg".to_string(),
				rating: 4.5,
				ingredients: vec!["flour".to_string(), "water".to_string(), "salt".to_string()],
				description: format!("{title}, made for the test suite."),
			},
		}
	}

	pub fn cuisine(mut self, cuisine: &str) -> Self {
		self.draft.cuisine = cuisine.to_string();

		self
	}

	pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
		self.draft.difficulty = difficulty;

		self
	}

	pub fn cook_time(mut self, minutes: f64) -> Self {
		self.draft.cook_time = minutes;

		self
	}

	pub fn servings(mut self, servings: f64) -> Self {
		self.draft.servings = servings;

		self
	}

	pub fn rating(mut self, rating: f64) -> Self {
		self.draft.rating = rating;

		self
	}

	pub fn ingredients(mut self, ingredients: &[&str]) -> Self {
		self.draft.ingredients = ingredients.iter().map(|item| item.to_string()).collect();

		self
	}

	pub fn build(self) -> RecipeDraft {
		self.draft
	}
}
