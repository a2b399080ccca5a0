//! Filter, sort and paginate over a record snapshot.
//!
//! [`run`] is a pure function of its inputs. It always works on the full collection it is
//! given: filtering and ordering happen before the page window is cut, so `total` counts every
//! match rather than the page size.
//!
//! Ordering uses a stable sort. Records with equal sort keys keep the order in which the filter
//! step yielded them, in both directions, so a descending page is not guaranteed to be the exact
//! reverse of the ascending one when keys tie.

use std::{borrow::Borrow, cmp::Ordering};

use serde::Serialize;

use crate::{
	predicate::RecipeFilter,
	query::{RecipeQuery, SortKey, SortOrder},
	recipe::Recipe,
};

/// One page of matches plus the number of matches before pagination.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryPage {
	pub recipes: Vec<Recipe>,
	pub total: usize,
}

pub fn run(records: &[Recipe], query: &RecipeQuery) -> QueryPage {
	let matches = RecipeFilter::from_query(query).into_predicate();
	let mut matched: Vec<&Recipe> = records.iter().filter(|recipe| matches(*recipe)).collect();
	let total = matched.len();

	sort(&mut matched, query.sort_by, query.sort_order);

	let recipes = paginate(&matched, query.offset(), query.limit as usize)
		.iter()
		.copied()
		.cloned()
		.collect();

	QueryPage { recipes, total }
}

/// Stable sort by `key` in `order`.
pub fn sort<R>(records: &mut [R], key: SortKey, order: SortOrder)
where
	R: Borrow<Recipe>,
{
	records.sort_by(|a, b| {
		let ordering = compare(key, a.borrow(), b.borrow());

		match order {
			SortOrder::Asc => ordering,
			SortOrder::Desc => ordering.reverse(),
		}
	});
}

/// Ascending comparator for `key`.
pub fn compare(key: SortKey, a: &Recipe, b: &Recipe) -> Ordering {
	match key {
		SortKey::Title => cmp_folded(&a.title, &b.title),
		SortKey::Cuisine => cmp_folded(&a.cuisine, &b.cuisine),
		SortKey::Difficulty => a.difficulty.rank().cmp(&b.difficulty.rank()),
		SortKey::CookTime => a.cook_time.total_cmp(&b.cook_time),
		SortKey::Rating => a.rating.total_cmp(&b.rating),
		SortKey::Servings => a.servings.total_cmp(&b.servings),
	}
}

/// The `[offset, offset + limit)` window of `items`, clipped to its bounds.
pub fn paginate<T>(items: &[T], offset: usize, limit: usize) -> &[T] {
	let start = offset.min(items.len());
	let end = offset.saturating_add(limit).min(items.len());

	&items[start..end]
}

fn cmp_folded(a: &str, b: &str) -> Ordering {
	a.chars().flat_map(char::to_lowercase).cmp(b.chars().flat_map(char::to_lowercase))
}
