use serde::{Deserialize, Serialize};

use pantry_domain::{InputMap, Recipe, RecipeQuery};

use crate::{PantryService, Result};

/// One page of search results with paging metadata.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
	pub recipes: Vec<Recipe>,
	pub total: usize,
	pub page: u32,
	pub total_pages: usize,
}

impl PantryService {
	/// Validates raw listing input, then filters, sorts and paginates the whole collection.
	pub fn search(&self, input: &InputMap) -> Result<SearchResponse> {
		let query = RecipeQuery::parse(input)?;
		let result = self.store.find_with_query(&query);
		let total_pages = query.total_pages(result.total);

		tracing::debug!(
			page = query.page,
			limit = query.limit,
			sort_by = query.sort_by.as_str(),
			sort_order = query.sort_order.as_str(),
			filtered = !query.is_unfiltered(),
			returned = result.recipes.len(),
			total = result.total,
			"Searched recipes."
		);

		Ok(SearchResponse {
			recipes: result.recipes,
			total: result.total,
			page: query.page,
			total_pages,
		})
	}
}
