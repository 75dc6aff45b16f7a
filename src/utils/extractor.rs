//! 路径参数提取器
//!
//! 将路径中的 ID 解析为正整数 i64，非法输入直接返回 400，
//! 避免每个 handler 重复解析逻辑。

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload};

use crate::models::{ApiResponse, ErrorCode};

macro_rules! define_safe_id_extractor {
    ($name:ident, $param:literal, $label:literal) => {
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|v| v.parse::<i64>().ok())
                    .filter(|v| *v > 0);

                ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => Err(actix_web::error::InternalError::from_response(
                        concat!("invalid ", $label),
                        HttpResponse::BadRequest().json(ApiResponse::error_empty(
                            ErrorCode::InvalidParameter,
                            concat!("Invalid ", $label, " in path"),
                        )),
                    )
                    .into()),
                })
            }
        }
    };
}

define_safe_id_extractor!(SafeUserIdI64, "user_id", "user id");
define_safe_id_extractor!(SafeClassIdI64, "class_id", "class id");
define_safe_id_extractor!(SafeAssignmentIdI64, "assignment_id", "assignment id");
define_safe_id_extractor!(SafeSubmissionIdI64, "submission_id", "submission id");
define_safe_id_extractor!(SafeAttachmentIdI64, "attachment_id", "attachment id");
define_safe_id_extractor!(SafeAnnouncementIdI64, "announcement_id", "announcement id");
