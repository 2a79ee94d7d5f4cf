use serde::{Deserialize, Serialize};

use super::{CompositionRules, PasswordGenerator};
use crate::{Error, Result};

/// Environment variable naming the TOML configuration file.
pub const CONFIG_PATH_ENV: &str = "PASSGEN_CONFIG_PATH";

/// TOML file read when [`CONFIG_PATH_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config/passgen.toml";

const ENV_PREFIX: &str = "PASSGEN_";

/// Generator configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Composition rules.
    pub rules: CompositionRules,
    /// Replacement for the default special characters `!@#$`.
    pub allowed_special_chars: Option<String>,
    /// Shuffle character positions after generation.
    pub shuffle: bool,
}

impl GeneratorConfig {
    /// Loads configuration from `.env` file, TOML file, and environment variables.
    ///
    /// Configuration priority (highest to lowest):
    /// 1. Environment variables with `PASSGEN_` prefix, nested keys split on `__`
    /// 2. TOML configuration file (if exists)
    /// 3. `.env` file (if exists)
    /// 4. Built-in defaults
    ///
    /// The `.env` file is searched for in the current directory and its parents.
    /// Its `PASSGEN_` entries are merged as their own layer; the process
    /// environment is left untouched.
    ///
    /// The TOML file path can be set via `PASSGEN_CONFIG_PATH`, in the
    /// environment or in `.env`. If not set, defaults to `./config/passgen.toml`.
    /// A missing file is silently skipped.
    ///
    /// # Environment Variable Examples
    /// ```bash
    /// PASSGEN_RULES__MIN_UPPERCASE=2
    /// PASSGEN_RULES__MIN_LENGTH=12
    /// PASSGEN_RULES__MAX_LENGTH=24
    /// PASSGEN_ALLOWED_SPECIAL_CHARS='%&*'
    /// PASSGEN_SHUFFLE=true
    /// ```
    ///
    /// # Errors
    /// Returns an error if the configuration is malformed or contains invalid values.
    #[allow(clippy::result_large_err)]
    pub fn from_env() -> figment::error::Result<Self> {
        use figment::providers::{Env, Format, Serialized, Toml};
        use figment::value::Value;
        use figment::Figment;

        let dotenv = dotenv_entries()?;

        let config_path = std::env::var(CONFIG_PATH_ENV)
            .ok()
            .or_else(|| {
                dotenv
                    .iter()
                    .find(|(key, _)| key == CONFIG_PATH_ENV)
                    .map(|(_, value)| value.clone())
            })
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
        tracing::debug!(path = %config_path, "loading generator configuration");

        let figment = dotenv
            .iter()
            .filter_map(|(key, raw)| {
                let key = key.strip_prefix(ENV_PREFIX)?.to_lowercase().replace("__", ".");
                let value: Value = raw.parse().unwrap_or_else(|never| match never {});
                Some(Serialized::default(&key, value))
            })
            .fold(Figment::new(), |figment, layer| figment.merge(layer));

        figment
            .merge(Toml::file(&config_path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
    }

    /// Rejects configurations that can never produce a password.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] if special characters are required but
    /// the override is empty.
    pub fn validate(&self) -> Result<()> {
        if let Some(chars) = &self.allowed_special_chars {
            if chars.is_empty() && self.rules.min_special_char > 0 {
                return Err(Error::InvalidConfig(format!(
                    "min_special_char is {} but allowed_special_chars is empty",
                    self.rules.min_special_char
                )));
            }
        }
        Ok(())
    }

    /// Validates the configuration and builds a generator from it.
    pub fn build(&self) -> Result<PasswordGenerator> {
        self.validate()?;
        Ok(
            PasswordGenerator::new(self.rules, self.allowed_special_chars.clone())
                .with_shuffle(self.shuffle),
        )
    }
}

/// Reads `.env` without exporting it into the process environment.
#[allow(clippy::result_large_err)]
fn dotenv_entries() -> figment::error::Result<Vec<(String, String)>> {
    let iter = match dotenvy::dotenv_iter() {
        Ok(iter) => iter,
        Err(e) if e.not_found() => return Ok(Vec::new()),
        Err(e) => return Err(e.to_string().into()),
    };
    iter.collect::<std::result::Result<Vec<_>, dotenvy::Error>>()
        .map_err(|e| e.to_string().into())
}
