use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ClassService;
use crate::errors::ClassHubError;
use crate::models::classes::{requests::CreateClassRequest, responses::ClassResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_class_code;

pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    class_data: CreateClassRequest,
) -> ActixResult<HttpResponse> {
    // 验证班级代码
    if let Err(msg) = validate_class_code(&class_data.code) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidParameter, msg)));
    }

    let storage = service.get_storage(request);

    match storage.create_class(class_data).await {
        Ok(class) => {
            info!("Class {} ({}) created successfully", class.id, class.code);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(ClassResponse { class }, "班级创建成功")))
        }
        Err(e) => Ok(handle_class_create_error(&e)),
    }
}

/// 错误响应辅助函数
fn handle_class_create_error(e: &ClassHubError) -> HttpResponse {
    let msg = format!("Class creation failed: {e}");
    error!("{}", msg);
    // teacher_id 角色校验失败
    if e.is_constraint_violation() {
        HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::ConstraintViolation,
            e.message(),
        ))
    } else if msg.contains("UNIQUE constraint failed") {
        HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::ClassAlreadyExists,
            "Class code already exists",
        ))
    } else if msg.contains("FOREIGN KEY constraint failed") {
        HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ClassCreationFailed,
            "Teacher does not exist",
        ))
    } else {
        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::ClassCreationFailed,
            msg,
        ))
    }
}
