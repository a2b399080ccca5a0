use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{
	input::InputMap,
	reader::{FieldReader, Presence},
	validation::ValidationErrors,
};

pub type RecipeId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
	Easy,
	Medium,
	Hard,
}
impl Difficulty {
	pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];
	pub const NAMES: [&'static str; 3] = ["Easy", "Medium", "Hard"];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Easy => "Easy",
			Self::Medium => "Medium",
			Self::Hard => "Hard",
		}
	}

	/// Sort ordinal: Easy=1, Medium=2, Hard=3.
	pub fn rank(self) -> u8 {
		match self {
			Self::Easy => 1,
			Self::Medium => 2,
			Self::Hard => 3,
		}
	}

	/// Exact, case-sensitive match on the variant name.
	pub fn parse(raw: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|difficulty| difficulty.as_str() == raw)
	}
}
impl Display for Difficulty {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Recognized record keys, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeField {
	Id,
	Title,
	Cuisine,
	Difficulty,
	CookTime,
	Servings,
	Image,
	Rating,
	Ingredients,
	Description,
}
impl RecipeField {
	const KEYS: [&'static str; 10] = [
		"id",
		"title",
		"cuisine",
		"difficulty",
		"cookTime",
		"servings",
		"image",
		"rating",
		"ingredients",
		"description",
	];

	pub fn as_str(self) -> &'static str {
		Self::KEYS[self as usize]
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
	pub id: RecipeId,
	pub title: String,
	pub cuisine: String,
	pub difficulty: Difficulty,
	/// Minutes.
	pub cook_time: f64,
	pub servings: f64,
	pub image: String,
	pub rating: f64,
	pub ingredients: Vec<String>,
	pub description: String,
}
impl Recipe {
	/// Validates a complete stored record, identifier included. Used for seed data.
	pub fn from_input(input: &InputMap) -> Result<Self, ValidationErrors> {
		let mut reader = FieldReader::new(input);
		let id = read_id(&mut reader, Presence::Required);
		let fields = RecipeFields::read(&mut reader, Presence::Required);

		reader.finish(id.zip(fields.into_draft()).map(|(id, draft)| draft.into_recipe(id)))
	}
}

/// Validated input for creating a recipe. The store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
	pub title: String,
	pub cuisine: String,
	pub difficulty: Difficulty,
	pub cook_time: f64,
	pub servings: f64,
	pub image: String,
	pub rating: f64,
	pub ingredients: Vec<String>,
	pub description: String,
}
impl RecipeDraft {
	/// Every field is required. An `id` key in the input is ignored.
	pub fn parse(input: &InputMap) -> Result<Self, ValidationErrors> {
		log_unknown_keys(input, &RecipeField::KEYS[1..]);

		let mut reader = FieldReader::new(input);
		let fields = RecipeFields::read(&mut reader, Presence::Required);

		reader.finish(fields.into_draft())
	}

	pub fn into_recipe(self, id: RecipeId) -> Recipe {
		Recipe {
			id,
			title: self.title,
			cuisine: self.cuisine,
			difficulty: self.difficulty,
			cook_time: self.cook_time,
			servings: self.servings,
			image: self.image,
			rating: self.rating,
			ingredients: self.ingredients,
			description: self.description,
		}
	}
}

/// Validated partial update. Only `id` is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipePatch {
	pub id: RecipeId,
	pub title: Option<String>,
	pub cuisine: Option<String>,
	pub difficulty: Option<Difficulty>,
	pub cook_time: Option<f64>,
	pub servings: Option<f64>,
	pub image: Option<String>,
	pub rating: Option<f64>,
	pub ingredients: Option<Vec<String>>,
	pub description: Option<String>,
}
impl RecipePatch {
	pub fn parse(input: &InputMap) -> Result<Self, ValidationErrors> {
		log_unknown_keys(input, &RecipeField::KEYS);

		let mut reader = FieldReader::new(input);
		let id = read_id(&mut reader, Presence::Required);
		let fields = RecipeFields::read(&mut reader, Presence::Optional);

		reader.finish(id.map(|id| Self {
			id,
			title: fields.title,
			cuisine: fields.cuisine,
			difficulty: fields.difficulty,
			cook_time: fields.cook_time,
			servings: fields.servings,
			image: fields.image,
			rating: fields.rating,
			ingredients: fields.ingredients,
			description: fields.description,
		}))
	}

	/// True when no field besides the identifier is set.
	pub fn is_empty(&self) -> bool {
		self.title.is_none()
			&& self.cuisine.is_none()
			&& self.difficulty.is_none()
			&& self.cook_time.is_none()
			&& self.servings.is_none()
			&& self.image.is_none()
			&& self.rating.is_none()
			&& self.ingredients.is_none()
			&& self.description.is_none()
	}

	/// Overwrites the fields this patch sets. The recipe keeps its own identifier.
	pub fn apply_to(self, recipe: &mut Recipe) {
		if let Some(title) = self.title {
			recipe.title = title;
		}
		if let Some(cuisine) = self.cuisine {
			recipe.cuisine = cuisine;
		}
		if let Some(difficulty) = self.difficulty {
			recipe.difficulty = difficulty;
		}
		if let Some(cook_time) = self.cook_time {
			recipe.cook_time = cook_time;
		}
		if let Some(servings) = self.servings {
			recipe.servings = servings;
		}
		if let Some(image) = self.image {
			recipe.image = image;
		}
		if let Some(rating) = self.rating {
			recipe.rating = rating;
		}
		if let Some(ingredients) = self.ingredients {
			recipe.ingredients = ingredients;
		}
		if let Some(description) = self.description {
			recipe.description = description;
		}
	}
}

struct RecipeFields {
	title: Option<String>,
	cuisine: Option<String>,
	difficulty: Option<Difficulty>,
	cook_time: Option<f64>,
	servings: Option<f64>,
	image: Option<String>,
	rating: Option<f64>,
	ingredients: Option<Vec<String>>,
	description: Option<String>,
}
impl RecipeFields {
	fn read(reader: &mut FieldReader<'_>, presence: Presence) -> Self {
		Self {
			title: reader.non_empty_text(
				RecipeField::Title.as_str(),
				presence,
				"Title is required",
			),
			cuisine: reader.non_empty_text(
				RecipeField::Cuisine.as_str(),
				presence,
				"Cuisine is required",
			),
			difficulty: reader
				.choice(RecipeField::Difficulty.as_str(), presence, &Difficulty::NAMES)
				.and_then(Difficulty::parse),
			cook_time: read_positive(
				reader,
				RecipeField::CookTime,
				presence,
				"Cook time must be positive",
			),
			servings: read_positive(
				reader,
				RecipeField::Servings,
				presence,
				"Servings must be positive",
			),
			image: read_image(reader, presence),
			rating: read_rating(reader, presence),
			ingredients: read_ingredients(reader, presence),
			description: reader.non_empty_text(
				RecipeField::Description.as_str(),
				presence,
				"Description is required",
			),
		}
	}

	fn into_draft(self) -> Option<RecipeDraft> {
		Some(RecipeDraft {
			title: self.title?,
			cuisine: self.cuisine?,
			difficulty: self.difficulty?,
			cook_time: self.cook_time?,
			servings: self.servings?,
			image: self.image?,
			rating: self.rating?,
			ingredients: self.ingredients?,
			description: self.description?,
		})
	}
}

fn read_id(reader: &mut FieldReader<'_>, presence: Presence) -> Option<RecipeId> {
	let field = RecipeField::Id.as_str();
	let id = reader.integer(field, presence)?;

	if id <= 0.0 {
		reader.fail(field, "ID must be positive");

		return None;
	}
	if id > u64::MAX as f64 {
		reader.fail(field, format!("Number must be less than or equal to {}", u64::MAX));

		return None;
	}

	Some(id as RecipeId)
}

fn read_positive(
	reader: &mut FieldReader<'_>,
	field: RecipeField,
	presence: Presence,
	message: &str,
) -> Option<f64> {
	let value = reader.number(field.as_str(), presence)?;

	if value <= 0.0 {
		reader.fail(field.as_str(), message);

		return None;
	}

	Some(value)
}

fn read_image(reader: &mut FieldReader<'_>, presence: Presence) -> Option<String> {
	let field = RecipeField::Image.as_str();
	let image = reader.text(field, presence)?;

	if url::Url::parse(image).is_err() {
		reader.fail(field, "Image must be a valid URL");

		return None;
	}

	Some(image.to_string())
}

fn read_rating(reader: &mut FieldReader<'_>, presence: Presence) -> Option<f64> {
	let field = RecipeField::Rating.as_str();
	let rating = reader.number(field, presence)?;

	if rating < 0.0 {
		reader.fail(field, "Rating must be at least 0");

		return None;
	}
	if rating > 5.0 {
		reader.fail(field, "Rating must be at most 5");

		return None;
	}

	Some(rating)
}

fn read_ingredients(reader: &mut FieldReader<'_>, presence: Presence) -> Option<Vec<String>> {
	let field = RecipeField::Ingredients.as_str();
	let items = reader.text_list(field, presence)?;
	let mut valid = true;

	for (index, item) in items.iter().enumerate() {
		if item.is_empty() {
			reader.fail(format!("{field}.{index}"), "Ingredient cannot be empty");

			valid = false;
		}
	}

	if items.is_empty() {
		reader.fail(field, "At least one ingredient is required");

		return None;
	}

	valid.then(|| items.into_iter().map(str::to_string).collect())
}

fn log_unknown_keys(input: &InputMap, known: &[&str]) {
	let unknown = input.unknown_keys(known);

	if !unknown.is_empty() {
		tracing::debug!(?unknown, "Ignoring unrecognized recipe fields.");
	}
}
