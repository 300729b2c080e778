use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, FileFormat, Source};
use serde::Deserialize;


#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub validation: ValidationConfig,
    pub logging: LoggingConfig,
}

/// ## Summary
/// How a validator reports cardinality violations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportMode {
    /// Stop at the first violated rule.
    #[default]
    FailFast,
    /// Run every rule and report all violations together.
    Collect,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    pub report: ReportMode,
    /// Enforce the cross-field notes (DUE/DURATION exclusion and friends)
    /// that rule tables document. Off unless explicitly enabled.
    pub enforce_cross_field: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            report: ReportMode::FailFast,
            enforce_cross_field: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from an optional `config.toml` and environment
    /// variables into a `Settings`.
    /// Environment variables take precedence over file values. Nested keys
    /// use `__`, e.g. `VALIDATION__REPORT=collect`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::layered(
            config::File::with_name("config.toml").required(false),
            Self::environment(),
        )
    }

    fn environment() -> Environment {
        Environment::default()
            .convert_case(config::Case::Snake)
            .separator("__")
            .ignore_empty(true)
            .try_parsing(true)
    }

    /// Defaults, then `file`, then `environment`; later sources win.
    fn layered<F>(file: F, environment: Environment) -> Result<Self>
    where
        F: Source + Send + Sync + 'static,
    {
        Ok(Self::defaults()?
            .add_source(file)
            .add_source(environment)
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Builds a `Settings` from an in-memory TOML document layered over the
    /// defaults. Keys missing from the document keep their default value.
    ///
    /// ## Errors
    /// Returns an error if the document is not valid TOML or does not match
    /// the settings schema.
    pub fn from_toml_str(document: &str) -> Result<Self> {
        Ok(Self::defaults()?
            .add_source(config::File::from_str(document, FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("validation.report", "fail_fast")?
            .set_default("validation.enforce_cross_field", false)?
            .set_default("logging.level", "info")?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
