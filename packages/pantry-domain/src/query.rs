use serde::{Deserialize, Serialize};

use crate::{
	input::InputMap,
	reader::{FieldReader, Presence},
	recipe::Difficulty,
	validation::ValidationErrors,
};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

/// Recognized query keys, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryField {
	Page,
	Limit,
	Search,
	Cuisine,
	Difficulty,
	CookTimeMin,
	CookTimeMax,
	ServingsMin,
	ServingsMax,
	RatingMin,
	RatingMax,
	SortBy,
	SortOrder,
}
impl QueryField {
	pub const ALL: [Self; 13] = [
		Self::Page,
		Self::Limit,
		Self::Search,
		Self::Cuisine,
		Self::Difficulty,
		Self::CookTimeMin,
		Self::CookTimeMax,
		Self::ServingsMin,
		Self::ServingsMax,
		Self::RatingMin,
		Self::RatingMax,
		Self::SortBy,
		Self::SortOrder,
	];
	/// Fields that arrive as text from a query string and are coerced to numbers first.
	pub const NUMERIC: [Self; 8] = [
		Self::Page,
		Self::Limit,
		Self::CookTimeMin,
		Self::CookTimeMax,
		Self::ServingsMin,
		Self::ServingsMax,
		Self::RatingMin,
		Self::RatingMax,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Page => "page",
			Self::Limit => "limit",
			Self::Search => "search",
			Self::Cuisine => "cuisine",
			Self::Difficulty => "difficulty",
			Self::CookTimeMin => "cookTimeMin",
			Self::CookTimeMax => "cookTimeMax",
			Self::ServingsMin => "servingsMin",
			Self::ServingsMax => "servingsMax",
			Self::RatingMin => "ratingMin",
			Self::RatingMax => "ratingMax",
			Self::SortBy => "sortBy",
			Self::SortOrder => "sortOrder",
		}
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
	#[default]
	Title,
	Cuisine,
	Difficulty,
	CookTime,
	Rating,
	Servings,
}
impl SortKey {
	pub const ALL: [Self; 6] = [
		Self::Title,
		Self::Cuisine,
		Self::Difficulty,
		Self::CookTime,
		Self::Rating,
		Self::Servings,
	];
	pub const NAMES: [&'static str; 6] =
		["title", "cuisine", "difficulty", "cookTime", "rating", "servings"];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Title => "title",
			Self::Cuisine => "cuisine",
			Self::Difficulty => "difficulty",
			Self::CookTime => "cookTime",
			Self::Rating => "rating",
			Self::Servings => "servings",
		}
	}

	/// Unrecognized names fall back to title ordering.
	pub fn parse_or_default(raw: &str) -> Self {
		Self::ALL.into_iter().find(|key| key.as_str() == raw).unwrap_or_default()
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
	#[default]
	Asc,
	Desc,
}
impl SortOrder {
	pub const NAMES: [&'static str; 2] = ["asc", "desc"];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Asc => "asc",
			Self::Desc => "desc",
		}
	}
}

/// Inclusive numeric bounds, each side optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
	pub min: Option<f64>,
	pub max: Option<f64>,
}
impl NumericRange {
	pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
		Self { min, max }
	}

	pub fn at_least(min: f64) -> Self {
		Self { min: Some(min), max: None }
	}

	pub fn at_most(max: f64) -> Self {
		Self { min: None, max: Some(max) }
	}

	pub fn is_unbounded(&self) -> bool {
		self.min.is_none() && self.max.is_none()
	}

	pub fn contains(&self, value: f64) -> bool {
		self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
	}
}

/// A validated listing request: filters, ordering and the page window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeQuery {
	pub page: u32,
	pub limit: u32,
	pub search: Option<String>,
	pub cuisine: Option<String>,
	pub difficulty: Option<Difficulty>,
	pub cook_time: NumericRange,
	pub servings: NumericRange,
	pub rating: NumericRange,
	pub sort_by: SortKey,
	pub sort_order: SortOrder,
}
impl RecipeQuery {
	/// Validates raw listing input. Numeric fields given as text are coerced first; text that
	/// is not a number stays text and is reported as a type error.
	pub fn parse(input: &InputMap) -> Result<Self, ValidationErrors> {
		let numeric = QueryField::NUMERIC.map(QueryField::as_str);
		let known = QueryField::ALL.map(QueryField::as_str);
		let input = input.coerce_numbers(&numeric);
		let unknown = input.unknown_keys(&known);

		if !unknown.is_empty() {
			tracing::debug!(?unknown, "Ignoring unrecognized query fields.");
		}

		let mut reader = FieldReader::new(&input);
		let page = reader.bounded_u32("page", Presence::Optional, 1);
		let limit = read_limit(&mut reader);
		let search = reader.text("search", Presence::Optional).and_then(non_empty);
		let cuisine = reader.text("cuisine", Presence::Optional).and_then(non_empty);
		let difficulty = reader
			.choice("difficulty", Presence::Optional, &Difficulty::NAMES)
			.and_then(Difficulty::parse);
		let cook_time = NumericRange::new(
			read_bound(&mut reader, "cookTimeMin", 0.0, None),
			read_bound(&mut reader, "cookTimeMax", 0.0, None),
		);
		let servings = NumericRange::new(
			read_bound(&mut reader, "servingsMin", 1.0, None),
			read_bound(&mut reader, "servingsMax", 1.0, None),
		);
		let rating = NumericRange::new(
			read_bound(&mut reader, "ratingMin", 0.0, Some(5.0)),
			read_bound(&mut reader, "ratingMax", 0.0, Some(5.0)),
		);
		let sort_by = reader
			.choice("sortBy", Presence::Optional, &SortKey::NAMES)
			.map(SortKey::parse_or_default)
			.unwrap_or_default();
		let sort_order = match reader.choice("sortOrder", Presence::Optional, &SortOrder::NAMES) {
			Some("desc") => SortOrder::Desc,
			_ => SortOrder::Asc,
		};

		reader.finish(Some(Self {
			page: page.unwrap_or(DEFAULT_PAGE),
			limit: limit.unwrap_or(DEFAULT_LIMIT),
			search,
			cuisine,
			difficulty,
			cook_time,
			servings,
			rating,
			sort_by,
			sort_order,
		}))
	}

	/// Index of the first record on the requested page.
	pub fn offset(&self) -> usize {
		(self.page.saturating_sub(1) as usize).saturating_mul(self.limit as usize)
	}

	/// `ceil(total / limit)`.
	pub fn total_pages(&self, total: usize) -> usize {
		match self.limit {
			0 => 0,
			limit => total.div_ceil(limit as usize),
		}
	}

	/// True when no filter clause is set.
	pub fn is_unfiltered(&self) -> bool {
		self.search.is_none()
			&& self.cuisine.is_none()
			&& self.difficulty.is_none()
			&& self.cook_time.is_unbounded()
			&& self.servings.is_unbounded()
			&& self.rating.is_unbounded()
	}
}
impl Default for RecipeQuery {
	fn default() -> Self {
		Self {
			page: DEFAULT_PAGE,
			limit: DEFAULT_LIMIT,
			search: None,
			cuisine: None,
			difficulty: None,
			cook_time: NumericRange::default(),
			servings: NumericRange::default(),
			rating: NumericRange::default(),
			sort_by: SortKey::default(),
			sort_order: SortOrder::default(),
		}
	}
}

fn read_limit(reader: &mut FieldReader<'_>) -> Option<u32> {
	let limit = reader.bounded_u32("limit", Presence::Optional, 1)?;

	if limit > MAX_LIMIT {
		reader.fail("limit", format!("Number must be less than or equal to {MAX_LIMIT}"));

		return None;
	}

	Some(limit)
}

fn read_bound(
	reader: &mut FieldReader<'_>,
	field: &str,
	min: f64,
	max: Option<f64>,
) -> Option<f64> {
	let value = reader.number(field, Presence::Optional)?;

	if value < min {
		reader.fail(field, format!("Number must be greater than or equal to {min}"));

		return None;
	}
	if let Some(max) = max
		&& value > max
	{
		reader.fail(field, format!("Number must be less than or equal to {max}"));

		return None;
	}

	Some(value)
}

fn non_empty(text: &str) -> Option<String> {
	(!text.is_empty()).then(|| text.to_string())
}
