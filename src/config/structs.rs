use serde::{Deserialize, Serialize};

use crate::errors::{Result, StickerboardError};

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// 包含：
/// - server: 服务器地址、端口、CPU 数量
/// - pocketbase: PocketBase 实例地址
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub pocketbase: PocketBaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > config.toml > 默认值
    /// ENV 前缀：SB，分隔符：__
    /// 示例：SB__SERVER__PORT=9999
    ///
    /// `config.toml` may be absent; an explicitly passed path must exist.
    pub fn try_load(path: Option<&str>) -> Result<Self> {
        use config::{Config, Environment, File};

        let required = path.is_some();
        let path = path.unwrap_or(DEFAULT_CONFIG_PATH);
        if required && !std::path::Path::new(path).is_file() {
            return Err(StickerboardError::config(format!(
                "Config file not found: {}",
                path
            )));
        }

        let settings = Config::builder()
            // 1. 从 TOML 文件加载
            .add_source(File::with_name(path).required(required))
            // 2. 从环境变量覆盖，前缀 SB，分隔符 __
            .add_source(
                Environment::with_prefix("SB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: StaticConfig = settings.try_deserialize()?;
        config.validate()?;

        if std::path::Path::new(path).exists() {
            eprintln!("[INFO] Configuration loaded from: {}", path);
        }
        Ok(config)
    }

    /// Like [`StaticConfig::try_load`], falling back to defaults on error.
    ///
    /// Logging is not initialized yet when this runs, so problems go to stderr.
    pub fn load(path: Option<&str>) -> Self {
        match Self::try_load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e.format_colored());
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.pocketbase.url).map_err(|e| {
            StickerboardError::config(format!(
                "Invalid pocketbase.url '{}': {}",
                self.pocketbase.url, e
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(StickerboardError::config(format!(
                "pocketbase.url must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(StickerboardError::config(format!(
                "logging.format must be 'text' or 'json', got '{}'",
                self.logging.format
            )));
        }
        Ok(())
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> Result<String> {
        Ok(toml::to_string_pretty(&Self::default())?)
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    #[serde(default = "default_cpu_count")]
    pub cpu_count: usize,
}

/// PocketBase 连接配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PocketBaseConfig {
    #[serde(default = "default_pocketbase_url")]
    pub url: String,
    /// 健康检查请求超时（秒）
    #[serde(default = "default_pocketbase_timeout")]
    pub timeout: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions for static config
// ============================================================

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_cpu_count() -> usize {
    num_cpus::get()
}

fn default_pocketbase_url() -> String {
    "http://localhost:8090".to_string()
}

fn default_pocketbase_timeout() -> u64 {
    2
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            cpu_count: default_cpu_count(),
        }
    }
}

impl Default for PocketBaseConfig {
    fn default() -> Self {
        Self {
            url: default_pocketbase_url(),
            timeout: default_pocketbase_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_local_pocketbase() {
        let config = StaticConfig::default();
        assert_eq!(config.pocketbase.url, "http://localhost:8090");
        assert_eq!(config.server.port, 8080);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_http_pocketbase_url() {
        let mut config = StaticConfig::default();
        config.pocketbase.url = "ftp://localhost:8090".to_string();
        assert!(config.validate().is_err());

        config.pocketbase.url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_unknown_log_format() {
        let mut config = StaticConfig::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sample_config_parses_back() {
        let sample = StaticConfig::generate_sample_config().unwrap();
        let parsed: StaticConfig = toml::from_str(&sample).unwrap();
        assert_eq!(parsed.pocketbase.url, StaticConfig::default().pocketbase.url);
        assert_eq!(parsed.logging.level, "info");
    }
}
