//! 统一 API 响应与错误码

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::errors::StickerboardError;

/// API 错误码枚举
///
/// 使用 serde_repr 序列化为数字。按千位分域：
/// - 0: 成功
/// - 1000-1099: 通用错误
/// - 2000-2099: 后端 (PocketBase) 错误
/// - 5000-5099: 配置错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1000,
    InvalidPayload = 1001,
    NotFound = 1004,
    InternalServerError = 1005,
    PayloadTooLarge = 1011,
    ServiceUnavailable = 1030,

    BackendUnreachable = 2000,

    ConfigInvalid = 5000,
}

impl From<&StickerboardError> for ErrorCode {
    fn from(err: &StickerboardError) -> Self {
        match err {
            StickerboardError::Validation(_) | StickerboardError::Serialization(_) => {
                ErrorCode::InvalidPayload
            }
            StickerboardError::Backend(_) => ErrorCode::BackendUnreachable,
            StickerboardError::Config(_) => ErrorCode::ConfigInvalid,
            StickerboardError::FileOperation(_) | StickerboardError::Internal(_) => {
                ErrorCode::InternalServerError
            }
        }
    }
}

/// JSON envelope for non-page responses
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    pub data: Option<T>,
}

/// 构建 JSON 响应
pub fn json_response<T: Serialize>(
    status: StatusCode,
    code: ErrorCode,
    message: impl Into<String>,
    data: Option<T>,
) -> HttpResponse {
    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(ApiResponse {
            code: code as i32,
            message: message.into(),
            data,
        })
}

/// 构建错误响应
pub fn error_response(status: StatusCode, error_code: ErrorCode, message: &str) -> HttpResponse {
    json_response::<()>(status, error_code, message, None)
}

/// 从 StickerboardError 构建错误响应（自动映射 HTTP 状态码和 ErrorCode）
pub fn error_from_stickerboard(err: &StickerboardError) -> HttpResponse {
    error_response(err.http_status(), ErrorCode::from(err), err.message())
}

/// Extractor failures (malformed JSON, wrong field types) rendered as the
/// same envelope, for use with `web::JsonConfig::error_handler`.
pub fn json_payload_error(
    err: actix_web::error::JsonPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    use actix_web::error::JsonPayloadError;

    let message = err.to_string();
    tracing::debug!("Rejected JSON payload: {}", message);
    let (status, code) = match &err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            (StatusCode::PAYLOAD_TOO_LARGE, ErrorCode::PayloadTooLarge)
        }
        _ => (StatusCode::BAD_REQUEST, ErrorCode::InvalidPayload),
    };
    let response = error_response(status, code, &message);
    actix_web::error::InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_serializes_as_number() {
        let value = serde_json::to_value(ErrorCode::InvalidPayload).unwrap();
        assert_eq!(value, serde_json::json!(1001));
    }

    #[test]
    fn test_error_mapping() {
        let err = StickerboardError::backend("down");
        assert_eq!(ErrorCode::from(&err), ErrorCode::BackendUnreachable);
        let resp = error_from_stickerboard(&err);
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let err = StickerboardError::validation("x");
        assert_eq!(ErrorCode::from(&err), ErrorCode::InvalidPayload);
    }
}
