mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Security, Service, Storage};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;
	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg, path.parent());

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config, base_dir: Option<&Path>) {
	if cfg
		.storage
		.seed_path
		.as_deref()
		.map(|path| path.as_os_str().to_string_lossy().trim().is_empty())
		.unwrap_or(false)
	{
		cfg.storage.seed_path = None;
	}

	if let Some(seed_path) = cfg.storage.seed_path.as_ref()
		&& seed_path.is_relative()
		&& let Some(base_dir) = base_dir
	{
		cfg.storage.seed_path = Some(base_dir.join(seed_path));
	}
}
