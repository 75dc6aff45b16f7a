use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::ApiResponse;
use crate::models::enrollments::requests::{
    EnrollStudentRequest, EnrollmentQueryParams, UnenrollQueryParams,
};
use crate::models::enrollments::responses::{EnrollmentListResponse, EnrollmentResponse};
use crate::services::EnrollmentService;

// 懒加载的全局 ENROLLMENT_SERVICE 实例
static ENROLLMENT_SERVICE: Lazy<EnrollmentService> = Lazy::new(EnrollmentService::new_lazy);

// HTTP处理程序

/// 学生选课
///
/// user_id 必须指向角色为 student 的用户
#[utoipa::path(
    post,
    path = "/api/v1/enrollments",
    tag = "enrollments",
    request_body = EnrollStudentRequest,
    responses(
        (status = 201, description = "选课成功", body = ApiResponse<EnrollmentResponse>),
        (status = 400, description = "用户或班级不存在"),
        (status = 409, description = "重复选课或 user_id 不是学生"),
    )
)]
pub async fn enroll_student(
    req: HttpRequest,
    enroll_data: web::Json<EnrollStudentRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .enroll_student(&req, enroll_data.into_inner())
        .await
}

/// 选课记录列表
#[utoipa::path(
    get,
    path = "/api/v1/enrollments",
    tag = "enrollments",
    params(
        ("class_id" = Option<i64>, Query, description = "按班级过滤"),
        ("user_id" = Option<i64>, Query, description = "按学生过滤"),
    ),
    responses(
        (status = 200, description = "查询成功", body = ApiResponse<EnrollmentListResponse>),
    )
)]
pub async fn list_enrollments(
    req: HttpRequest,
    query: web::Query<EnrollmentQueryParams>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .list_enrollments(&req, query.into_inner())
        .await
}

/// 退课
///
/// 通过 (user_id, class_id) 复合主键定位
#[utoipa::path(
    delete,
    path = "/api/v1/enrollments",
    tag = "enrollments",
    params(
        ("user_id" = i64, Query, description = "学生 ID"),
        ("class_id" = i64, Query, description = "班级 ID"),
    ),
    responses(
        (status = 200, description = "退课成功"),
        (status = 404, description = "选课记录不存在"),
    )
)]
pub async fn unenroll_student(
    req: HttpRequest,
    query: web::Query<UnenrollQueryParams>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .unenroll_student(&req, query.into_inner())
        .await
}

// 配置路由
pub fn configure_enrollments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/enrollments").service(
            web::resource("")
                .route(web::get().to(list_enrollments))
                .route(web::post().to(enroll_student))
                .route(web::delete().to(unenroll_student)),
        ),
    );
}
