use actix_web::http::StatusCode;
use std::fmt;

#[derive(Debug, Clone)]
pub enum StickerboardError {
    Config(String),
    Validation(String),
    Backend(String),
    Serialization(String),
    FileOperation(String),
    Internal(String),
}

impl StickerboardError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            StickerboardError::Config(_) => "E001",
            StickerboardError::Validation(_) => "E002",
            StickerboardError::Backend(_) => "E003",
            StickerboardError::Serialization(_) => "E004",
            StickerboardError::FileOperation(_) => "E005",
            StickerboardError::Internal(_) => "E006",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            StickerboardError::Config(_) => "Configuration Error",
            StickerboardError::Validation(_) => "Validation Error",
            StickerboardError::Backend(_) => "Backend Error",
            StickerboardError::Serialization(_) => "Serialization Error",
            StickerboardError::FileOperation(_) => "File Operation Error",
            StickerboardError::Internal(_) => "Internal Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            StickerboardError::Config(msg)
            | StickerboardError::Validation(msg)
            | StickerboardError::Backend(msg)
            | StickerboardError::Serialization(msg)
            | StickerboardError::FileOperation(msg)
            | StickerboardError::Internal(msg) => msg,
        }
    }

    /// HTTP status used when the error reaches a handler boundary
    pub fn http_status(&self) -> StatusCode {
        match self {
            StickerboardError::Validation(_) | StickerboardError::Serialization(_) => {
                StatusCode::BAD_REQUEST
            }
            StickerboardError::Backend(_) => StatusCode::BAD_GATEWAY,
            StickerboardError::Config(_)
            | StickerboardError::FileOperation(_)
            | StickerboardError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 格式化为彩色输出（启动失败时打印到 stderr）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 CLI 模式）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for StickerboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for StickerboardError {}

// 便捷的构造函数
impl StickerboardError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        StickerboardError::Config(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        StickerboardError::Validation(msg.into())
    }

    pub fn backend<T: Into<String>>(msg: T) -> Self {
        StickerboardError::Backend(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        StickerboardError::Serialization(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        StickerboardError::FileOperation(msg.into())
    }

    pub fn internal<T: Into<String>>(msg: T) -> Self {
        StickerboardError::Internal(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for StickerboardError {
    fn from(err: std::io::Error) -> Self {
        StickerboardError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for StickerboardError {
    fn from(err: serde_json::Error) -> Self {
        StickerboardError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for StickerboardError {
    fn from(err: config::ConfigError) -> Self {
        StickerboardError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for StickerboardError {
    fn from(err: toml::ser::Error) -> Self {
        StickerboardError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StickerboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            StickerboardError::config("a"),
            StickerboardError::validation("b"),
            StickerboardError::backend("c"),
            StickerboardError::serialization("d"),
            StickerboardError::file_operation("e"),
            StickerboardError::internal("f"),
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = StickerboardError::validation("x must be a number");
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Validation Error: x must be a number");
    }

    #[test]
    fn test_backend_maps_to_bad_gateway() {
        let err = StickerboardError::backend("connection refused");
        assert_eq!(err.http_status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.message(), "connection refused");
    }

    #[test]
    fn test_colored_format_carries_code_and_message() {
        let err = StickerboardError::config("Config file not found");
        let out = err.format_colored();
        assert!(out.contains("E001"));
        assert!(out.contains("Configuration Error"));
        assert!(out.contains("Config file not found"));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: StickerboardError = io.into();
        assert_eq!(err.code(), "E005");
    }
}
