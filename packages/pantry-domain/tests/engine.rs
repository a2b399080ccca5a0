use pantry_domain::{
	Difficulty, InputMap, NumericRange, Recipe, RecipeFilter, RecipeQuery, SortKey, SortOrder,
	engine,
};

#[allow(clippy::too_many_arguments)]
fn recipe(
	id: u64,
	title: &str,
	cuisine: &str,
	difficulty: Difficulty,
	cook_time: u32,
	servings: u32,
	rating: f64,
	ingredients: &[&str],
) -> Recipe {
	Recipe {
		id,
		title: title.to_string(),
		cuisine: cuisine.to_string(),
		difficulty,
		cook_time: f64::from(cook_time),
		servings: f64::from(servings),
		image: format!("https://example.com/{id}.jpg"),
		rating,
		ingredients: ingredients.iter().map(|item| item.to_string()).collect(),
		description: format!("{title} from the {cuisine} kitchen."),
	}
}

/// cookTime [10, 20, 30] with titles [C, A, B].
fn three_records() -> Vec<Recipe> {
	vec![
		recipe(1, "C", "Italian", Difficulty::Easy, 10, 2, 4.0, &["basil"]),
		recipe(2, "A", "Thai", Difficulty::Medium, 20, 4, 4.5, &["lime"]),
		recipe(3, "B", "Greek", Difficulty::Hard, 30, 6, 3.5, &["feta"]),
	]
}

fn pantry() -> Vec<Recipe> {
	use Difficulty::{Easy, Hard, Medium};

	vec![
		recipe(1, "Pad Thai", "Thai", Medium, 30, 2, 4.7, &["rice noodles", "peanuts"]),
		recipe(2, "margherita pizza", "Italian", Medium, 25, 4, 4.5, &["basil", "mozzarella"]),
		recipe(3, "Greek Salad", "Greek", Easy, 10, 2, 4.2, &["feta", "olives"]),
		recipe(4, "Beef Wellington", "British", Hard, 120, 6, 4.8, &["beef", "puff pastry"]),
		recipe(5, "Green Curry", "thai", Medium, 40, 4, 4.4, &["coconut milk", "basil"]),
		recipe(6, "Tiramisu", "Italian", Easy, 30, 8, 4.9, &["mascarpone", "espresso"]),
		recipe(7, "Moussaka", "Greek", Hard, 90, 6, 4.2, &["aubergine", "lamb"]),
	]
}

fn titles(recipes: &[Recipe]) -> Vec<&str> {
	recipes.iter().map(|recipe| recipe.title.as_str()).collect()
}

fn ids(recipes: &[Recipe]) -> Vec<u64> {
	recipes.iter().map(|recipe| recipe.id).collect()
}

fn parse(pairs: &[(&str, &str)]) -> RecipeQuery {
	RecipeQuery::parse(&InputMap::from_query_pairs(pairs.iter().copied()))
		.expect("Test query must be valid.")
}

#[test]
fn sorts_by_title_ascending() {
	let query = parse(&[("sortBy", "title"), ("sortOrder", "asc")]);
	let page = engine::run(&three_records(), &query);

	assert_eq!(titles(&page.recipes), vec!["A", "B", "C"]);
	assert_eq!(page.total, 3);
}

#[test]
fn cook_time_min_filters_inclusively() {
	let page = engine::run(&three_records(), &parse(&[("cookTimeMin", "15")]));

	assert_eq!(page.total, 2);
	assert_eq!(ids(&page.recipes), vec![2, 3]);

	let inclusive = engine::run(&three_records(), &parse(&[("cookTimeMin", "20")]));

	assert_eq!(inclusive.total, 2);
}

#[test]
fn second_page_of_one_sorted_by_cook_time() {
	let page = engine::run(
		&three_records(),
		&parse(&[("page", "2"), ("limit", "1"), ("sortBy", "cookTime")]),
	);

	assert_eq!(page.recipes.len(), 1);
	assert_eq!(page.recipes[0].cook_time, 20.0);
	assert_eq!(page.total, 3);
}

#[test]
fn total_is_independent_of_page_window() {
	let records = pantry();
	let filter = [("search", "basil")];
	let expected = records
		.iter()
		.filter(|recipe| RecipeFilter::from_query(&parse(&filter)).matches(recipe))
		.count();

	for page in 1..=4 {
		for limit in 1..=4 {
			let page_text = page.to_string();
			let limit_text = limit.to_string();
			let query = parse(&[
				("search", "basil"),
				("page", page_text.as_str()),
				("limit", limit_text.as_str()),
			]);
			let result = engine::run(&records, &query);
			let offset = query.offset();

			assert_eq!(result.total, expected);
			assert_eq!(result.recipes.len(), limit.min(expected.saturating_sub(offset)));
		}
	}
}

#[test]
fn offset_beyond_matches_yields_empty_page() {
	let page = engine::run(&pantry(), &parse(&[("page", "50"), ("limit", "100")]));

	assert!(page.recipes.is_empty());
	assert_eq!(page.total, 7);
}

#[test]
fn search_covers_title_cuisine_description_and_ingredients() {
	let records = pantry();

	assert_eq!(ids(&engine::run(&records, &parse(&[("search", "PIZZA")])).recipes), vec![2]);
	assert_eq!(ids(&engine::run(&records, &parse(&[("search", "british")])).recipes), vec![4]);
	assert_eq!(ids(&engine::run(&records, &parse(&[("search", "kitchen")])).recipes).len(), 7);
	let pastry = parse(&[("search", "Pastry"), ("sortBy", "rating")]);

	assert_eq!(ids(&engine::run(&records, &pastry).recipes), vec![4]);
}

#[test]
fn cuisine_filter_is_case_insensitive_exact_match() {
	let records = pantry();
	let thai = engine::run(&records, &parse(&[("cuisine", "THAI")]));
	let partial = engine::run(&records, &parse(&[("cuisine", "Tha")]));

	assert_eq!(ids(&thai.recipes), vec![5, 1]);
	assert_eq!(partial.total, 0);
}

#[test]
fn filters_combine_with_and() {
	let records = pantry();
	let query = parse(&[
		("difficulty", "Medium"),
		("servingsMin", "3"),
		("ratingMax", "4.5"),
		("cookTimeMax", "40"),
	]);
	let page = engine::run(&records, &query);

	assert_eq!(ids(&page.recipes), vec![5, 2]);
	assert_eq!(page.total, 2);
}

#[test]
fn inverted_range_matches_nothing() {
	let query = RecipeQuery {
		cook_time: NumericRange::new(Some(60.0), Some(30.0)),
		..RecipeQuery::default()
	};

	assert_eq!(engine::run(&pantry(), &query).total, 0);
}

#[test]
fn no_filters_match_everything() {
	let records = pantry();
	let filter = RecipeFilter::from_query(&RecipeQuery::default());

	assert!(filter.is_unconstrained());
	assert!(records.iter().all(|recipe| filter.matches(recipe)));
}

#[test]
fn difficulty_sorts_by_rank_not_name() {
	let query =
		RecipeQuery { sort_by: SortKey::Difficulty, limit: 100, ..RecipeQuery::default() };
	let page = engine::run(&pantry(), &query);
	let ranks: Vec<u8> = page.recipes.iter().map(|recipe| recipe.difficulty.rank()).collect();

	assert_eq!(ranks, vec![1, 1, 2, 2, 2, 3, 3]);
}

#[test]
fn title_sort_ignores_case() {
	let query = RecipeQuery { limit: 100, ..RecipeQuery::default() };
	let page = engine::run(&pantry(), &query);

	assert_eq!(
		titles(&page.recipes),
		vec![
			"Beef Wellington",
			"Greek Salad",
			"Green Curry",
			"margherita pizza",
			"Moussaka",
			"Pad Thai",
			"Tiramisu",
		]
	);
}

#[test]
fn sorting_a_sorted_page_is_idempotent() {
	let records = pantry();

	for key in SortKey::ALL {
		for order in [SortOrder::Asc, SortOrder::Desc] {
			let query = RecipeQuery {
				sort_by: key,
				sort_order: order,
				limit: 4,
				..RecipeQuery::default()
			};
			let page = engine::run(&records, &query);
			let mut resorted = page.recipes.clone();

			engine::sort(&mut resorted, key, order);

			assert_eq!(ids(&resorted), ids(&page.recipes), "{key:?} {order:?}");
		}
	}
}

#[test]
fn descending_returns_the_same_match_set() {
	let records = pantry();

	for key in SortKey::ALL {
		let asc = engine::run(
			&records,
			&RecipeQuery { sort_by: key, limit: 100, ..RecipeQuery::default() },
		);
		let desc = engine::run(
			&records,
			&RecipeQuery {
				sort_by: key,
				sort_order: SortOrder::Desc,
				limit: 100,
				..RecipeQuery::default()
			},
		);
		let mut asc_ids = ids(&asc.recipes);
		let mut desc_ids = ids(&desc.recipes);

		asc_ids.sort_unstable();
		desc_ids.sort_unstable();

		assert_eq!(asc_ids, desc_ids, "{key:?}");
		assert_eq!(asc.total, desc.total);
	}
}

#[test]
fn numeric_sorts_keep_filter_order_on_ties() {
	let records = pantry();
	let asc = engine::run(
		&records,
		&RecipeQuery { sort_by: SortKey::CookTime, limit: 100, ..RecipeQuery::default() },
	);
	let desc = engine::run(
		&records,
		&RecipeQuery {
			sort_by: SortKey::Rating,
			sort_order: SortOrder::Desc,
			limit: 100,
			..RecipeQuery::default()
		},
	);

	// cookTime has ties (30, 30); rating has ties (4.2, 4.2).
	assert_eq!(ids(&asc.recipes), vec![3, 2, 1, 6, 5, 7, 4]);
	assert_eq!(ids(&desc.recipes), vec![6, 4, 1, 2, 5, 3, 7]);
}

#[test]
fn equal_keys_keep_filter_order_in_both_directions() {
	let records = pantry();
	let asc = engine::run(
		&records,
		&RecipeQuery { sort_by: SortKey::Servings, limit: 100, ..RecipeQuery::default() },
	);
	let desc = engine::run(
		&records,
		&RecipeQuery {
			sort_by: SortKey::Servings,
			sort_order: SortOrder::Desc,
			limit: 100,
			..RecipeQuery::default()
		},
	);

	// Ties are not reversed: servings 2 -> [1, 3], 4 -> [2, 5], 6 -> [4, 7] either way.
	assert_eq!(ids(&asc.recipes), vec![1, 3, 2, 5, 4, 7, 6]);
	assert_eq!(ids(&desc.recipes), vec![6, 4, 7, 2, 5, 1, 3]);
}

#[test]
fn filtering_runs_over_the_full_collection_not_a_prior_page() {
	let records = pantry();
	let first_page = engine::run(&records, &parse(&[("limit", "2")]));
	let filtered = engine::run(&records, &parse(&[("limit", "2"), ("cuisine", "thai")]));

	assert_eq!(ids(&first_page.recipes), vec![4, 3]);
	assert_eq!(ids(&filtered.recipes), vec![5, 1]);
	assert_eq!(filtered.total, 2);
}

#[test]
fn fractional_cook_times_filter_and_sort() {
	let mut records = three_records();

	records[0].cook_time = 12.5;
	records[1].cook_time = 12.25;

	let page = engine::run(&records, &parse(&[("cookTimeMax", "12.5"), ("sortBy", "cookTime")]));

	assert_eq!(ids(&page.recipes), vec![2, 1]);
	assert_eq!(page.total, 2);
}

#[test]
fn empty_collection_yields_empty_page() {
	let page = engine::run(&[], &RecipeQuery::default());

	assert!(page.recipes.is_empty());
	assert_eq!(page.total, 0);
}
