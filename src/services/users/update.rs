use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::models::users::{requests::UpdateUserRequest, responses::UserResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_email;

pub async fn update_user(
    service: &UserService,
    request: &HttpRequest,
    user_id: i64,
    update_data: UpdateUserRequest,
) -> ActixResult<HttpResponse> {
    // 更新邮箱时同样校验格式
    if let Some(ref email) = update_data.email
        && let Err(msg) = validate_email(email)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidParameter, msg)));
    }

    let storage = service.get_storage(request);

    match storage.update_user(user_id, update_data).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserResponse { user },
            "User updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => {
            let msg = format!("User update failed: {e}");
            error!("{}", msg);
            // 角色变更被既有引用拒绝
            if e.is_constraint_violation() {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::ConstraintViolation,
                    e.message(),
                )))
            } else if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::UserAlreadyExists,
                    "Email already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    msg,
                )))
            }
        }
    }
}
