use config::{Config as ConfigLoader, ConfigError, Environment, File};
use lawsathi_extract::OcrConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub mongodb: MongoDbConfig,
    pub llm: LlmConfig,
    pub extraction: ExtractionConfig,
    pub logging: LoggingConfig,

    // Secrets (from ENV only)
    pub mongodb_uri: String,
    pub llm_api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8001,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Comma-separated allow-list; `*` admits every origin
    pub origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origins: "*".to_string(),
        }
    }
}

impl CorsConfig {
    pub fn allowed_origins(&self) -> Vec<String> {
        self.origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MongoDbConfig {
    pub database: String,
}

impl Default for MongoDbConfig {
    fn default() -> Self {
        Self {
            database: "lawsathi".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub model: String,
    /// OpenAI-compatible gateway; the public endpoint when unset
    pub base_url: Option<String>,
    pub temperature: Option<f32>,
    /// Completion token cap; provider default when unset
    pub max_tokens: Option<u32>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o".to_string(),
            base_url: None,
            temperature: None,
            max_tokens: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub tesseract_bin: String,
    pub ocr_languages: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        let ocr = OcrConfig::default();
        Self {
            tesseract_bin: ocr.binary,
            ocr_languages: ocr.languages,
        }
    }
}

impl ExtractionConfig {
    pub fn ocr_config(&self) -> OcrConfig {
        OcrConfig {
            binary: self.tesseract_bin.clone(),
            languages: self.ocr_languages.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from TOML files and environment variables
    ///
    /// Hierarchy (weakest to strongest):
    /// 1. config/default.toml
    /// 2. config/{ENV}.toml (if ENV is set)
    /// 3. `LAWSATHI_<SECTION>__<KEY>` environment variables
    /// 4. `DB_NAME` and `CORS_ORIGINS`
    ///
    /// `MONGO_URL` and `OPENAI_API_KEY` are required and never read from files.
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("ENV").unwrap_or_else(|_| "dev".to_string());

        let builder = ConfigLoader::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("LAWSATHI")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;

        let mut cfg: Config = config.try_deserialize()?;

        if let Ok(database) = std::env::var("DB_NAME") {
            cfg.mongodb.database = database;
        }
        if let Ok(origins) = std::env::var("CORS_ORIGINS") {
            cfg.cors.origins = origins;
        }

        cfg.mongodb_uri = std::env::var("MONGO_URL")
            .map_err(|_| ConfigError::Message("MONGO_URL environment variable is required".to_string()))?;
        cfg.llm_api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| ConfigError::Message("OPENAI_API_KEY environment variable is required".to_string()))?;

        Ok(cfg)
    }
}
