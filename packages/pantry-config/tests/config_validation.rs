use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

use pantry_config::{Config, Error};

const SAMPLE_CONFIG_TEMPLATE_TOML: &str = include_str!("fixtures/sample_config.template.toml");

fn sample_toml_with(section: &str, key: &str, value: Value) -> String {
	let mut root: Value =
		toml::from_str(SAMPLE_CONFIG_TEMPLATE_TOML).expect("Failed to parse template config.");
	let table = root
		.as_table_mut()
		.expect("Template config must be a table.")
		.get_mut(section)
		.and_then(Value::as_table_mut)
		.expect("Template config must include the requested section.");

	table.insert(key.to_string(), value);

	toml::to_string(&root).expect("Failed to render template config.")
}

fn write_temp_config(payload: String) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be valid.")
		.as_nanos();
	let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
	let pid = std::process::id();
	let mut path = env::temp_dir();

	path.push(format!("pantry_config_test_{nanos}_{pid}_{ordinal}.toml"));

	fs::write(&path, payload).expect("Failed to write test config.");

	path
}

fn base_config() -> Config {
	toml::from_str(SAMPLE_CONFIG_TEMPLATE_TOML).expect("Failed to parse test config.")
}

#[test]
fn sample_config_loads() {
	let path = write_temp_config(SAMPLE_CONFIG_TEMPLATE_TOML.to_string());
	let result = pantry_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	let cfg = result.expect("Expected sample config to load.");

	assert_eq!(cfg.service.http_bind, "127.0.0.1:3000");
	assert_eq!(cfg.service.log_level, "info");
	assert!(cfg.security.bind_localhost_only);
}

#[test]
fn relative_seed_path_resolves_against_config_dir() {
	let path = write_temp_config(SAMPLE_CONFIG_TEMPLATE_TOML.to_string());
	let result = pantry_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	let cfg = result.expect("Expected sample config to load.");
	let seed_path = cfg.storage.seed_path.expect("Expected seed_path to be kept.");

	assert_eq!(seed_path, env::temp_dir().join("recipes.json"));
}

#[test]
fn blank_seed_path_is_treated_as_absent() {
	let payload = sample_toml_with("storage", "seed_path", Value::String("  ".to_string()));
	let path = write_temp_config(payload);
	let result = pantry_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	let cfg = result.expect("Expected config with blank seed_path to load.");

	assert!(cfg.storage.seed_path.is_none());
}

#[test]
fn http_bind_must_be_non_empty() {
	let payload = sample_toml_with("service", "http_bind", Value::String(" ".to_string()));
	let path = write_temp_config(payload);
	let result = pantry_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	let err = result.expect_err("Expected http_bind validation error.");

	assert!(
		err.to_string().contains("service.http_bind must be non-empty."),
		"Unexpected error: {err}"
	);
}

#[test]
fn log_level_must_be_non_empty() {
	let mut cfg = base_config();

	cfg.service.log_level = String::new();

	let err = pantry_config::validate(&cfg).expect_err("Expected log_level validation error.");

	assert!(matches!(err, Error::Validation { .. }));
	assert!(err.to_string().contains("service.log_level must be non-empty."));
}

#[test]
fn missing_optional_sections_use_defaults() {
	let cfg: Config = toml::from_str("[service]\nhttp_bind = \"127.0.0.1:0\"\n")
		.expect("Failed to parse minimal config.");

	assert_eq!(cfg.service.log_level, "info");
	assert!(cfg.storage.seed_path.is_none());
	assert!(cfg.security.bind_localhost_only);
	assert!(pantry_config::validate(&cfg).is_ok());
}

#[test]
fn missing_file_reports_read_error() {
	let path = env::temp_dir().join("pantry_config_test_missing.toml");
	let err = pantry_config::load(&path).expect_err("Expected read error.");

	assert!(matches!(err, Error::ReadConfig { .. }));
}

#[test]
fn malformed_toml_reports_parse_error() {
	let path = write_temp_config("[service\nhttp_bind = 1".to_string());
	let result = pantry_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	assert!(matches!(result, Err(Error::ParseConfig { .. })));
}
