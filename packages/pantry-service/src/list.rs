use serde::{Deserialize, Serialize};

use pantry_domain::{
	Recipe, ValidationErrors,
	query::{DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT},
};

use crate::{PantryService, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListRequest {
	pub page: u32,
	pub limit: u32,
}
impl Default for ListRequest {
	fn default() -> Self {
		Self { page: DEFAULT_PAGE, limit: DEFAULT_LIMIT }
	}
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListResponse {
	pub recipes: Vec<Recipe>,
	pub page: u32,
	pub limit: u32,
	pub total: usize,
}

impl PantryService {
	/// Records in insertion order, without filtering or sorting.
	pub fn list(&self, req: ListRequest) -> Result<ListResponse> {
		let mut errors = ValidationErrors::default();

		if req.page < 1 {
			errors.push("page", "Number must be greater than or equal to 1");
		}
		if req.limit < 1 {
			errors.push("limit", "Number must be greater than or equal to 1");
		}
		if req.limit > MAX_LIMIT {
			errors.push("limit", format!("Number must be less than or equal to {MAX_LIMIT}"));
		}
		if !errors.is_empty() {
			return Err(errors.into());
		}

		let offset = (req.page as usize - 1).saturating_mul(req.limit as usize);
		let window = self.store.find_all(offset, req.limit as usize);

		tracing::debug!(
			page = req.page,
			limit = req.limit,
			returned = window.recipes.len(),
			total = window.total,
			"Listed recipes."
		);

		Ok(ListResponse {
			recipes: window.recipes,
			page: req.page,
			limit: req.limit,
			total: window.total,
		})
	}
}
