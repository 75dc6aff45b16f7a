use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::ApiResponse;
use crate::models::assignments::requests::{
    AssignmentQueryParams, CreateAssignmentRequest, UpdateAssignmentRequest,
};
use crate::models::assignments::responses::{AssignmentListResponse, AssignmentResponse};
use crate::services::AssignmentService;
use crate::utils::SafeAssignmentIdI64;

// 懒加载的全局 ASSIGNMENT_SERVICE 实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);

// HTTP处理程序

/// 创建作业
#[utoipa::path(
    post,
    path = "/api/v1/assignments",
    tag = "assignments",
    request_body = CreateAssignmentRequest,
    responses(
        (status = 201, description = "作业创建成功", body = ApiResponse<AssignmentResponse>),
        (status = 400, description = "标题为空或班级不存在"),
    )
)]
pub async fn create_assignment(
    req: HttpRequest,
    assignment_data: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .create_assignment(&req, assignment_data.into_inner())
        .await
}

/// 作业列表
#[utoipa::path(
    get,
    path = "/api/v1/assignments",
    tag = "assignments",
    params(
        ("page" = Option<i64>, Query, description = "页码，从 1 开始"),
        ("size" = Option<i64>, Query, description = "每页数量，最大 100"),
        ("class_id" = Option<i64>, Query, description = "按班级过滤"),
    ),
    responses(
        (status = 200, description = "查询成功", body = ApiResponse<AssignmentListResponse>),
    )
)]
pub async fn list_assignments(
    req: HttpRequest,
    query: web::Query<AssignmentQueryParams>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_assignments(&req, query.into_inner())
        .await
}

/// 作业详情
#[utoipa::path(
    get,
    path = "/api/v1/assignments/{assignment_id}",
    tag = "assignments",
    params(("assignment_id" = i64, Path, description = "作业 ID")),
    responses(
        (status = 200, description = "查询成功", body = ApiResponse<AssignmentResponse>),
        (status = 404, description = "作业不存在"),
    )
)]
pub async fn get_assignment(
    req: HttpRequest,
    assignment_id: SafeAssignmentIdI64,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.get_assignment(&req, assignment_id.0).await
}

/// 更新作业
#[utoipa::path(
    put,
    path = "/api/v1/assignments/{assignment_id}",
    tag = "assignments",
    params(("assignment_id" = i64, Path, description = "作业 ID")),
    request_body = UpdateAssignmentRequest,
    responses(
        (status = 200, description = "更新成功", body = ApiResponse<AssignmentResponse>),
        (status = 404, description = "作业不存在"),
    )
)]
pub async fn update_assignment(
    req: HttpRequest,
    assignment_id: SafeAssignmentIdI64,
    update_data: web::Json<UpdateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .update_assignment(&req, assignment_id.0, update_data.into_inner())
        .await
}

/// 删除作业
#[utoipa::path(
    delete,
    path = "/api/v1/assignments/{assignment_id}",
    tag = "assignments",
    params(("assignment_id" = i64, Path, description = "作业 ID")),
    responses(
        (status = 200, description = "删除成功"),
        (status = 404, description = "作业不存在"),
    )
)]
pub async fn delete_assignment(
    req: HttpRequest,
    assignment_id: SafeAssignmentIdI64,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .delete_assignment(&req, assignment_id.0)
        .await
}

// 配置路由
pub fn configure_assignments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/assignments")
            .service(
                web::resource("")
                    .route(web::get().to(list_assignments))
                    .route(web::post().to(create_assignment)),
            )
            .service(
                web::resource("/{assignment_id}")
                    .route(web::get().to(get_assignment))
                    .route(web::put().to(update_assignment))
                    .route(web::delete().to(delete_assignment)),
            ),
    );
}
