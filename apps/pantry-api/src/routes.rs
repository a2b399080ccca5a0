use axum::{
	Json, Router,
	extract::{Path, Query, State, rejection::JsonRejection},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::get,
};
use serde::Serialize;
use serde_json::Value;

use pantry_domain::{InputMap, Recipe, RecipeId, ValidationErrors};
use pantry_service::{Error as ServiceError, SearchResponse};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/api/recipes", get(search_recipes).post(create_recipe))
		.route("/api/recipes/{id}", get(get_recipe).put(update_recipe).delete(delete_recipe))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

// Pairs rather than a map so repeated keys reach validation instead of being collapsed.
async fn search_recipes(
	State(state): State<AppState>,
	Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<SearchResponse>, ApiError> {
	let input = InputMap::from_query_pairs(pairs);
	let response = state.service.search(&input)?;

	Ok(Json(response))
}

async fn get_recipe(
	State(state): State<AppState>,
	Path(id): Path<String>,
) -> Result<Json<Recipe>, ApiError> {
	let recipe = state.service.get(parse_id(&id)?)?;

	Ok(Json(recipe))
}

async fn create_recipe(
	State(state): State<AppState>,
	payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Recipe>, ApiError> {
	let input = json_input(payload)?;
	let recipe = state.service.create(&input)?;

	Ok(Json(recipe))
}

async fn update_recipe(
	State(state): State<AppState>,
	Path(id): Path<String>,
	payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Recipe>, ApiError> {
	let id = parse_id(&id)?;
	let input = json_input(payload)?;
	let recipe = state.service.update(id, &input)?;

	Ok(Json(recipe))
}

async fn delete_recipe(
	State(state): State<AppState>,
	Path(id): Path<String>,
) -> Result<Json<Recipe>, ApiError> {
	let recipe = state.service.delete(parse_id(&id)?)?;

	Ok(Json(recipe))
}

fn parse_id(raw: &str) -> Result<RecipeId, ApiError> {
	raw.parse::<RecipeId>().ok().filter(|id| *id > 0).ok_or_else(|| {
		json_error(
			StatusCode::BAD_REQUEST,
			"invalid_request",
			"Recipe id must be a positive integer.",
			Some(vec![format!("id: Expected positive integer, received '{raw}'")]),
		)
	})
}

fn json_input(payload: Result<Json<Value>, JsonRejection>) -> Result<InputMap, ApiError> {
	let Json(value) = payload.map_err(|rejection| {
		json_error(StatusCode::BAD_REQUEST, "invalid_request", rejection.body_text(), None)
	})?;

	Ok(InputMap::from_json(value)?)
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}
impl ApiError {
	fn new(
		status: StatusCode,
		error_code: impl Into<String>,
		message: impl Into<String>,
		fields: Option<Vec<String>>,
	) -> Self {
		Self { status, error_code: error_code.into(), message: message.into(), fields }
	}
}
impl From<ValidationErrors> for ApiError {
	fn from(errors: ValidationErrors) -> Self {
		json_error(
			StatusCode::BAD_REQUEST,
			"invalid_request",
			"Request failed validation.",
			Some(errors.to_lines()),
		)
	}
}
impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::Validation(errors) => errors.into(),
			ServiceError::NotFound { message } =>
				json_error(StatusCode::NOT_FOUND, "not_found", message, None),
			ServiceError::Storage { message } => {
				tracing::error!(%message, "Recipe store failure.");

				json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", message, None)
			},
		}
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body =
			ErrorBody { error_code: self.error_code, message: self.message, fields: self.fields };

		(self.status, Json(body)).into_response()
	}
}

pub fn json_error(
	status: StatusCode,
	code: &str,
	message: impl Into<String>,
	fields: Option<Vec<String>>,
) -> ApiError {
	ApiError::new(status, code, message, fields)
}
