// Configuration module entry point
// Loads default headers and logging settings from a file and the environment

mod types;

pub use types::{HandlerConfig, LoggingConfig};

use crate::logger;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};

/// Prefix of environment overrides, e.g. `RES_HANDLER__LOGGING__LEVEL=warn`
///
/// Variable names are folded to lowercase and cannot carry `-`, so
/// `RES_HANDLER__DEFAULT_HEADERS__X_API_KEY` sets the header `x_api_key`.
/// Hyphenated header names have to come from a config file.
pub const ENV_PREFIX: &str = "RES_HANDLER";

impl HandlerConfig {
    /// Load configuration from specified file path (extension optional)
    /// A missing file is not an error; defaults and environment still apply
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let config = Self::build(
            config::Config::builder()
                .add_source(File::with_name(config_path).required(false))
                .add_source(environment()),
        )?;

        logger::log_info(&format!(
            "[Config] Loaded {} default header(s) from {config_path}",
            config.default_headers.len()
        ));
        Ok(config)
    }

    /// Parse configuration from an in-memory string
    pub fn parse(contents: &str, format: FileFormat) -> Result<Self, config::ConfigError> {
        Self::build(config::Config::builder().add_source(File::from_str(contents, format)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, config::ConfigError> {
        builder
            .set_default("logging.level", "info")?
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator("__")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::{Mutex, MutexGuard};

    /// Serializes tests that read the process environment
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Sets environment variables for the lifetime of the guard
    struct ScopedEnv {
        names: Vec<&'static str>,
        _lock: MutexGuard<'static, ()>,
    }

    impl ScopedEnv {
        fn set(vars: &[(&'static str, &str)]) -> Self {
            let lock = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            for (name, value) in vars {
                std::env::set_var(name, value);
            }
            Self {
                names: vars.iter().map(|(name, _)| *name).collect(),
                _lock: lock,
            }
        }
    }

    impl Drop for ScopedEnv {
        fn drop(&mut self) {
            for name in &self.names {
                std::env::remove_var(name);
            }
        }
    }

    #[test]
    fn test_parse_toml() {
        let config = HandlerConfig::parse(
            r#"
            [default_headers]
            x-powered-by = "res_handler"
            x-custom-test = true

            [logging]
            level = "warn"
            "#,
            FileFormat::Toml,
        )
        .unwrap();

        assert_eq!(config.default_headers.len(), 2);
        assert_eq!(config.default_headers["x-powered-by"], json!("res_handler"));
        assert_eq!(config.default_headers["x-custom-test"], json!(true));
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.access_log_file, None);
    }

    #[test]
    fn test_parse_json() {
        let config = HandlerConfig::parse(
            r#"{"default_headers": {"x-retry-after": 30}}"#,
            FileFormat::Json,
        )
        .unwrap();

        assert_eq!(config.default_headers["x-retry-after"], json!(30));
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_parse_empty() {
        let config = HandlerConfig::parse("", FileFormat::Toml).unwrap();
        assert_eq!(config, HandlerConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let _env = ScopedEnv::set(&[]);
        let config = HandlerConfig::load_from("does/not/exist/res_handler").unwrap();
        assert!(config.default_headers.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let _env = ScopedEnv::set(&[]);
        let dir = std::env::temp_dir().join(format!("res_handler_config_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("handler.toml");
        std::fs::write(&path, "[default_headers]\naccess-control-allow-origin = \"*\"\n").unwrap();

        let config = HandlerConfig::load_from(path.to_str().unwrap()).unwrap();

        assert_eq!(config.default_headers["access-control-allow-origin"], json!("*"));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_environment_overrides() {
        let _env = ScopedEnv::set(&[
            ("RES_HANDLER__DEFAULT_HEADERS__X_API_KEY", "secret"),
            ("RES_HANDLER__LOGGING__LEVEL", "error"),
        ]);

        let config = HandlerConfig::load_from("does/not/exist/res_handler").unwrap();

        assert_eq!(config.default_headers.len(), 1);
        assert_eq!(config.default_headers["x_api_key"], json!("secret"));
        assert_eq!(config.logging.level, "error");
    }

    #[test]
    fn test_environment_ignores_other_prefixes() {
        let _env = ScopedEnv::set(&[("OTHER_APP__DEFAULT_HEADERS__X_FOO", "bar")]);

        let config = HandlerConfig::load_from("does/not/exist/res_handler").unwrap();

        assert!(config.default_headers.is_empty());
    }
}
