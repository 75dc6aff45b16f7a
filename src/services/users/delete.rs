use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::UserService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_user(
    service: &UserService,
    request: &HttpRequest,
    user_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_user(user_id).await {
        Ok(true) => {
            info!("User {} deleted", user_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("User deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => {
            let msg = format!("User deletion failed: {e}");
            error!("{}", msg);
            // 教师仍被班级或公告引用时（RESTRICT 外键）
            if msg.contains("FOREIGN KEY constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::ConstraintViolation,
                    "User is still referenced by a class or announcement",
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
