use anyhow::Result;
use ::config::builder::DefaultState;
use ::config::{ConfigBuilder, Environment, File, Map};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub system_config: SystemConfig,
    pub translate_config: TranslateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub host: String,
    pub port: u16,
    /// Verbose logging for development
    pub debug: bool,
    /// Router-wide bound on in-flight requests, unbounded when unset
    pub max_concurrent_requests: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateConfig {
    pub translate_provider: String,
    pub default_source_lang: String,
    pub default_target_lang: String,
    pub google: GoogleTranslateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GoogleTranslateConfig {
    pub base_url: String,
    /// Provider request timeout; reqwest's default (none) when unset
    pub timeout_secs: Option<u64>,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            debug: true,
            max_concurrent_requests: None,
        }
    }
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            translate_provider: "google".to_string(),
            default_source_lang: "en".to_string(),
            default_target_lang: "es".to_string(),
            google: GoogleTranslateConfig::default(),
        }
    }
}

impl Default for GoogleTranslateConfig {
    fn default() -> Self {
        Self {
            base_url: "https://translate.googleapis.com/translate_a/single".to_string(),
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Config file locations, most specific first
    pub fn candidate_paths() -> Vec<String> {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()));

        vec![
            std::env::var("CONFIG_PATH").ok(),
            Some("conf.yaml".to_string()),
            Some("conf.json".to_string()),
            exe_dir.and_then(|d| d.join("conf.yaml").to_str().map(|s| s.to_string())),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load from the first existing candidate file, then apply `TRANSLATOR_*`
    /// environment overrides. Falls back to defaults when no file exists.
    ///
    /// Returns the config together with the path it was read from, if any.
    pub fn load(candidates: &[String]) -> Result<(Self, Option<String>)> {
        Self::load_with_env(candidates, None)
    }

    /// `env_vars` replaces the process environment when given
    fn load_with_env(
        candidates: &[String],
        env_vars: Option<Map<String, String>>,
    ) -> Result<(Self, Option<String>)> {
        let path = candidates
            .iter()
            .find(|p| Path::new(p.as_str()).is_file())
            .cloned();

        let mut builder = ::config::Config::builder();
        if let Some(p) = &path {
            builder = builder.add_source(File::from(Path::new(p.as_str())));
        }

        let config = Self::from_builder(builder, Self::environment(env_vars))?;
        Ok((config, path))
    }

    /// `TRANSLATOR_SYSTEM_CONFIG__PORT=8080` overrides `system_config.port`
    fn environment(env_vars: Option<Map<String, String>>) -> Environment {
        Environment::with_prefix("TRANSLATOR")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(env_vars)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>, env: Environment) -> Result<Self> {
        let config: Config = builder
            .add_source(env)
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.system_config.port == 0 {
            anyhow::bail!("system_config.port must be non-zero");
        }
        if self.system_config.max_concurrent_requests == Some(0) {
            anyhow::bail!("system_config.max_concurrent_requests must be at least 1");
        }
        let translate = &self.translate_config;
        if translate.default_source_lang.trim().is_empty()
            || translate.default_target_lang.trim().is_empty()
        {
            anyhow::bail!("translate_config default languages must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::config::FileFormat;

    fn no_env() -> Environment {
        Config::environment(Some(Map::new()))
    }

    fn env(vars: &[(&str, &str)]) -> Environment {
        Config::environment(Some(
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
        ))
    }

    fn yaml_builder(yaml: &str) -> ConfigBuilder<DefaultState> {
        ::config::Config::builder().add_source(File::from_str(yaml, FileFormat::Yaml))
    }

    fn from_yaml(yaml: &str) -> Result<Config> {
        Config::from_builder(yaml_builder(yaml), no_env())
    }

    #[test]
    fn defaults_match_development_server() {
        let config = Config::from_builder(::config::Config::builder(), no_env()).unwrap();
        assert_eq!(config.system_config.host, "0.0.0.0");
        assert_eq!(config.system_config.port, 5000);
        assert!(config.system_config.debug);
        assert_eq!(config.system_config.max_concurrent_requests, None);
        assert_eq!(config.translate_config.translate_provider, "google");
        assert_eq!(config.translate_config.default_source_lang, "en");
        assert_eq!(config.translate_config.default_target_lang, "es");
        assert_eq!(config.translate_config.google.timeout_secs, None);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let config = from_yaml(
            "system_config:\n  port: 8080\n  max_concurrent_requests: 16\ntranslate_config:\n  google:\n    timeout_secs: 5\n",
        )
        .unwrap();
        assert_eq!(config.system_config.port, 8080);
        assert_eq!(config.system_config.host, "0.0.0.0");
        assert_eq!(config.system_config.max_concurrent_requests, Some(16));
        assert_eq!(config.translate_config.google.timeout_secs, Some(5));
        assert_eq!(config.translate_config.translate_provider, "google");
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(from_yaml("system_config:\n  port: 0\n").is_err());
        assert!(from_yaml("system_config:\n  max_concurrent_requests: 0\n").is_err());
        assert!(from_yaml("translate_config:\n  default_target_lang: \"  \"\n").is_err());
    }

    #[test]
    fn load_without_any_file_uses_defaults() {
        let (config, path) =
            Config::load_with_env(&["does/not/exist.yaml".to_string()], Some(Map::new())).unwrap();
        assert!(path.is_none());
        assert_eq!(config.system_config.port, 5000);
    }

    #[test]
    fn environment_overrides_file_values() {
        let config = Config::from_builder(
            yaml_builder("system_config:\n  port: 6000\n  debug: true\n"),
            env(&[
                ("TRANSLATOR_SYSTEM_CONFIG__PORT", "8080"),
                ("TRANSLATOR_SYSTEM_CONFIG__MAX_CONCURRENT_REQUESTS", "4"),
                ("TRANSLATOR_TRANSLATE_CONFIG__DEFAULT_TARGET_LANG", "fr"),
                ("UNRELATED_SYSTEM_CONFIG__PORT", "1"),
            ]),
        )
        .unwrap();

        assert_eq!(config.system_config.port, 8080);
        assert_eq!(config.system_config.max_concurrent_requests, Some(4));
        assert_eq!(config.translate_config.default_target_lang, "fr");
        assert!(config.system_config.debug);
    }

    #[test]
    fn invalid_environment_value_is_rejected() {
        let result = Config::from_builder(
            ::config::Config::builder(),
            env(&[("TRANSLATOR_SYSTEM_CONFIG__PORT", "0")]),
        );
        assert!(result.is_err());
    }
}
