use crate::{
	query::{NumericRange, RecipeQuery},
	recipe::{Difficulty, Recipe},
};

/// Match rules derived from a [`RecipeQuery`]. Every clause that is set must hold; a filter
/// built from a query without clauses matches every record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeFilter {
	search: Option<String>,
	cuisine: Option<String>,
	difficulty: Option<Difficulty>,
	cook_time: NumericRange,
	servings: NumericRange,
	rating: NumericRange,
}
impl RecipeFilter {
	pub fn from_query(query: &RecipeQuery) -> Self {
		Self {
			search: lowered(query.search.as_deref()),
			cuisine: lowered(query.cuisine.as_deref()),
			difficulty: query.difficulty,
			cook_time: query.cook_time,
			servings: query.servings,
			rating: query.rating,
		}
	}

	pub fn matches(&self, recipe: &Recipe) -> bool {
		self.matches_search(recipe)
			&& self.matches_cuisine(recipe)
			&& self.difficulty.is_none_or(|difficulty| recipe.difficulty == difficulty)
			&& self.cook_time.contains(recipe.cook_time)
			&& self.servings.contains(recipe.servings)
			&& self.rating.contains(recipe.rating)
	}

	/// The filter as a plain closure, for iterator adapters.
	pub fn into_predicate(self) -> impl Fn(&Recipe) -> bool {
		move |recipe: &Recipe| self.matches(recipe)
	}

	pub fn is_unconstrained(&self) -> bool {
		*self == Self::default()
	}

	fn matches_search(&self, recipe: &Recipe) -> bool {
		let Some(term) = self.search.as_deref() else {
			return true;
		};

		contains_folded(&recipe.title, term)
			|| contains_folded(&recipe.cuisine, term)
			|| contains_folded(&recipe.description, term)
			|| recipe.ingredients.iter().any(|ingredient| contains_folded(ingredient, term))
	}

	fn matches_cuisine(&self, recipe: &Recipe) -> bool {
		self.cuisine.as_deref().is_none_or(|cuisine| recipe.cuisine.to_lowercase() == cuisine)
	}
}

fn lowered(value: Option<&str>) -> Option<String> {
	value.filter(|value| !value.is_empty()).map(str::to_lowercase)
}

/// Case-insensitive substring test. `needle` is already lowercase.
fn contains_folded(haystack: &str, needle: &str) -> bool {
	haystack.to_lowercase().contains(needle)
}
