pub mod engine;
pub mod input;
pub mod predicate;
pub mod query;
pub mod recipe;
pub mod validation;

mod reader;

pub use engine::QueryPage;
pub use input::{InputMap, InputValue};
pub use predicate::RecipeFilter;
pub use query::{NumericRange, QueryField, RecipeQuery, SortKey, SortOrder};
pub use recipe::{Difficulty, Recipe, RecipeDraft, RecipeField, RecipeId, RecipePatch};
pub use validation::{FieldError, ValidationErrors};
