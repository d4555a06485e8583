use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Gateway configuration, built once at startup and passed into the
/// handlers through `AppState`. Handlers never read the environment.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GatewayConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub model: ModelConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Token verification settings.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AuthConfig {
    /// HS256 signing secret.
    #[serde(default = "default_secret")]
    pub secret: String,

    /// Expected issuer claim.
    #[serde(default = "default_issuer")]
    pub issuer: String,
}

/// External model settings.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ModelConfig {
    /// API key for the generative-model service.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_model")]
    pub model_name: String,

    /// Override for the model API base URL.
    pub base_url: Option<String>,
}

fn default_port() -> u16 {
    8080
}

fn default_secret() -> String {
    "dev-secret".to_string()
}

fn default_issuer() -> String {
    "specter-ai-client".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: default_secret(),
            issuer: default_issuer(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model_name: default_model(),
            base_url: None,
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            auth: AuthConfig::default(),
            model: ModelConfig::default(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl GatewayConfig {
    /// Load configuration with precedence:
    /// 1. Default values (lowest)
    /// 2. `./specter.toml`, if present
    /// 3. `SPECTER_*` environment variables (highest)
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let file = Path::new("./specter.toml");
        if file.exists() {
            config = Self::load_from_file(file)?;
            tracing::debug!("Loaded config from {}", file.display());
        }

        let env_vars: HashMap<String, String> = std::env::vars().collect();
        config.apply_env_vars(&env_vars)?;

        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: GatewayConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn apply_env_vars(&mut self, env_vars: &HashMap<String, String>) -> Result<(), ConfigError> {
        for (key, value) in env_vars {
            if let Some(config_key) = key.strip_prefix("SPECTER_") {
                match config_key {
                    "PORT" => {
                        self.server.port =
                            value.parse().map_err(|_| ConfigError::InvalidValue {
                                field: "server.port".to_string(),
                                reason: format!("not a port number: {value}"),
                            })?;
                    }
                    "JWT_SECRET" => self.auth.secret = value.clone(),
                    "JWT_ISSUER" => self.auth.issuer = value.clone(),
                    "GEMINI_API_KEY" => self.model.api_key = value.clone(),
                    "MODEL" => self.model.model_name = value.clone(),
                    "MODEL_BASE_URL" => self.model.base_url = Some(value.clone()),
                    _ => {} // Ignore unknown environment variables
                }
            }
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.secret.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "auth.secret".to_string(),
                reason: "signing secret must not be empty".to_string(),
            });
        }

        if self.auth.issuer.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "auth.issuer".to_string(),
                reason: "issuer must not be empty".to_string(),
            });
        }

        if self.model.model_name.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "model.model_name".to_string(),
                reason: "model name must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = GatewayConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.auth.secret, "dev-secret");
        assert_eq!(config.auth.issuer, "specter-ai-client");
        assert_eq!(config.model.model_name, "gemini-2.5-flash");
        assert!(config.model.api_key.is_empty());
    }

    #[test]
    fn test_toml_parsing() {
        let toml_content = r#"
[server]
port = 9090

[auth]
secret = "prod-secret"

[model]
api_key = "abc123"
model_name = "gemini-2.5-pro"
"#;

        let config: GatewayConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.auth.secret, "prod-secret");
        // Issuer falls back to the default when the file omits it
        assert_eq!(config.auth.issuer, "specter-ai-client");
        assert_eq!(config.model.model_name, "gemini-2.5-pro");
    }

    #[test]
    fn test_env_var_application() {
        let mut config = GatewayConfig::default();
        let mut env_vars = HashMap::new();
        env_vars.insert("SPECTER_PORT".to_string(), "3000".to_string());
        env_vars.insert("SPECTER_JWT_SECRET".to_string(), "from-env".to_string());
        env_vars.insert("SPECTER_GEMINI_API_KEY".to_string(), "key".to_string());
        env_vars.insert("UNRELATED".to_string(), "ignored".to_string());

        config.apply_env_vars(&env_vars).unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.auth.secret, "from-env");
        assert_eq!(config.model.api_key, "key");
    }

    #[test]
    fn test_env_var_invalid_port() {
        let mut config = GatewayConfig::default();
        let mut env_vars = HashMap::new();
        env_vars.insert("SPECTER_PORT".to_string(), "not-a-port".to_string());

        assert!(config.apply_env_vars(&env_vars).is_err());
    }

    #[test]
    fn test_config_file_loading() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[auth]
secret = "file-secret"
issuer = "other-issuer"
"#
        )
        .unwrap();

        let config = GatewayConfig::load_from_file(temp_file.path()).unwrap();
        assert_eq!(config.auth.secret, "file-secret");
        assert_eq!(config.auth.issuer, "other-issuer");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_validation() {
        let mut config = GatewayConfig::default();
        assert!(config.validate().is_ok());

        config.auth.secret.clear();
        assert!(config.validate().is_err());

        config.auth.secret = "s".to_string();
        config.model.model_name.clear();
        assert!(config.validate().is_err());
    }
}
