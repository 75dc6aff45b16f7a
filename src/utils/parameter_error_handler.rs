//! 请求参数错误处理器
//!
//! 将 JSON/查询参数反序列化错误转换为统一的 ApiResponse 结构。

use actix_web::error::{Error, InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse};

use crate::models::{ApiResponse, ErrorCode};

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    let detail = err.to_string();
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::InvalidParameter,
        format!("Invalid JSON payload: {detail}"),
    ));
    InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    let detail = err.to_string();
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::InvalidParameter,
        format!("Invalid query parameters: {detail}"),
    ));
    InternalError::from_response(err, response).into()
}
