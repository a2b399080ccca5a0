use std::{
	collections::HashSet,
	sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use pantry_domain::{QueryPage, Recipe, RecipeDraft, RecipeId, RecipePatch, RecipeQuery, engine};

use crate::{Error, RecipeStore, Result};

/// In-process recipe collection behind a single reader-writer lock.
///
/// Identifiers come from a high-water mark that only grows, so an id freed by a delete is never
/// handed out again.
#[derive(Debug, Default)]
pub struct MemoryStore {
	inner: RwLock<Inner>,
}
impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a store over existing records. Fails on duplicate identifiers.
	pub fn with_records(records: Vec<Recipe>) -> Result<Self> {
		let mut seen = HashSet::with_capacity(records.len());

		for recipe in &records {
			if !seen.insert(recipe.id) {
				return Err(Error::Conflict(format!("Duplicate recipe id {}.", recipe.id)));
			}
		}

		let last_id = records.iter().map(|recipe| recipe.id).max().unwrap_or(0);

		Ok(Self { inner: RwLock::new(Inner { records, last_id }) })
	}

	/// Copy of every record in insertion order.
	pub fn snapshot(&self) -> Vec<Recipe> {
		self.read().records.clone()
	}

	// A guard is only released after the mutation it protects has completed, so a poisoned
	// lock still holds a consistent collection.
	fn read(&self) -> RwLockReadGuard<'_, Inner> {
		self.inner.read().unwrap_or_else(PoisonError::into_inner)
	}

	fn write(&self) -> RwLockWriteGuard<'_, Inner> {
		self.inner.write().unwrap_or_else(PoisonError::into_inner)
	}
}
impl RecipeStore for MemoryStore {
	fn find_by_id(&self, id: RecipeId) -> Result<Recipe> {
		let inner = self.read();

		inner.position(id).map(|index| inner.records[index].clone())
	}

	fn find_all(&self, offset: usize, limit: usize) -> QueryPage {
		let inner = self.read();

		QueryPage {
			recipes: engine::paginate(&inner.records, offset, limit).to_vec(),
			total: inner.records.len(),
		}
	}

	fn find_with_query(&self, query: &RecipeQuery) -> QueryPage {
		engine::run(&self.read().records, query)
	}

	fn create(&self, draft: RecipeDraft) -> Result<Recipe> {
		let mut inner = self.write();
		let id = inner
			.last_id
			.checked_add(1)
			.ok_or_else(|| Error::Conflict("Recipe identifiers are exhausted.".to_string()))?;
		let recipe = draft.into_recipe(id);

		inner.last_id = id;
		inner.records.push(recipe.clone());

		Ok(recipe)
	}

	fn update(&self, id: RecipeId, patch: RecipePatch) -> Result<Recipe> {
		let mut inner = self.write();
		let index = inner.position(id)?;
		let recipe = &mut inner.records[index];

		patch.apply_to(recipe);

		Ok(recipe.clone())
	}

	fn delete(&self, id: RecipeId) -> Result<Recipe> {
		let mut inner = self.write();
		let index = inner.position(id)?;

		Ok(inner.records.remove(index))
	}

	fn len(&self) -> usize {
		self.read().records.len()
	}
}

#[derive(Debug, Default)]
struct Inner {
	records: Vec<Recipe>,
	last_id: RecipeId,
}
impl Inner {
	fn position(&self, id: RecipeId) -> Result<usize> {
		self.records.iter().position(|recipe| recipe.id == id).ok_or(Error::NotFound { id })
	}
}
