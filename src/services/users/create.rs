use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::UserService;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{requests::CreateUserRequest, responses::UserResponse},
};
use crate::utils::validate::{validate_email, validate_full_name};

pub async fn create_user(
    service: &UserService,
    request: &HttpRequest,
    user_data: CreateUserRequest,
) -> ActixResult<HttpResponse> {
    // 验证邮箱
    if let Err(msg) = validate_email(&user_data.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidParameter, msg)));
    }

    // 验证姓名
    if let Err(msg) = validate_full_name(&user_data.full_name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidParameter, msg)));
    }

    let storage = service.get_storage(request);

    match storage.create_user(user_data).await {
        Ok(user) => {
            info!("User {} ({}) created successfully", user.id, user.email);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(UserResponse { user }, "用户创建成功")))
        }
        Err(e) => {
            let msg = format!("User creation failed: {e}");
            error!("{}", msg);
            // 判断是否唯一约束冲突
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::UserAlreadyExists,
                    "Email already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::UserCreationFailed, msg)))
            }
        }
    }
}
