use std::sync::Arc;

use pantry_service::PantryService;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<PantryService>,
}
impl AppState {
	pub fn new(config: &pantry_config::Config) -> color_eyre::Result<Self> {
		let service = PantryService::from_config(config)?;

		Ok(Self::from_service(service))
	}

	pub fn from_service(service: PantryService) -> Self {
		Self { service: Arc::new(service) }
	}
}
