use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::ApiResponse;
use crate::models::users::requests::{CreateUserRequest, UpdateUserRequest, UserQueryParams};
use crate::models::users::responses::{UserListResponse, UserResponse};
use crate::services::UserService;
use crate::utils::SafeUserIdI64;

// 懒加载的全局 USER_SERVICE 实例
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

// HTTP处理程序

/// 创建用户
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "用户创建成功", body = ApiResponse<UserResponse>),
        (status = 400, description = "邮箱或姓名非法"),
        (status = 409, description = "邮箱已存在"),
    )
)]
pub async fn create_user(
    req: HttpRequest,
    user_data: web::Json<CreateUserRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.create_user(&req, user_data.into_inner()).await
}

/// 用户列表（可按角色过滤）
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "users",
    params(
        ("page" = Option<i64>, Query, description = "页码，从 1 开始"),
        ("size" = Option<i64>, Query, description = "每页数量，最大 100"),
        ("role" = Option<String>, Query, description = "按角色过滤: teacher/student/admin"),
        ("search" = Option<String>, Query, description = "按邮箱或姓名搜索"),
    ),
    responses(
        (status = 200, description = "查询成功", body = ApiResponse<UserListResponse>),
    )
)]
pub async fn list_users(
    req: HttpRequest,
    query: web::Query<UserQueryParams>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.list_users(&req, query.into_inner()).await
}

/// 用户详情
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}",
    tag = "users",
    params(("user_id" = i64, Path, description = "用户 ID")),
    responses(
        (status = 200, description = "查询成功", body = ApiResponse<UserResponse>),
        (status = 404, description = "用户不存在"),
    )
)]
pub async fn get_user(req: HttpRequest, user_id: SafeUserIdI64) -> ActixResult<HttpResponse> {
    USER_SERVICE.get_user(&req, user_id.0).await
}

/// 更新用户
#[utoipa::path(
    put,
    path = "/api/v1/users/{user_id}",
    tag = "users",
    params(("user_id" = i64, Path, description = "用户 ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "更新成功", body = ApiResponse<UserResponse>),
        (status = 404, description = "用户不存在"),
        (status = 409, description = "邮箱冲突或角色变更被既有引用拒绝"),
    )
)]
pub async fn update_user(
    req: HttpRequest,
    user_id: SafeUserIdI64,
    update_data: web::Json<UpdateUserRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .update_user(&req, user_id.0, update_data.into_inner())
        .await
}

/// 删除用户
#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}",
    tag = "users",
    params(("user_id" = i64, Path, description = "用户 ID")),
    responses(
        (status = 200, description = "删除成功"),
        (status = 404, description = "用户不存在"),
        (status = 409, description = "用户仍被班级或公告引用"),
    )
)]
pub async fn delete_user(req: HttpRequest, user_id: SafeUserIdI64) -> ActixResult<HttpResponse> {
    USER_SERVICE.delete_user(&req, user_id.0).await
}

// 配置路由
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(
                web::resource("")
                    .route(web::get().to(list_users))
                    .route(web::post().to(create_user)),
            )
            .service(
                web::resource("/{user_id}")
                    .route(web::get().to(get_user))
                    .route(web::put().to(update_user))
                    .route(web::delete().to(delete_user)),
            ),
    );
}
