use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::ApiResponse;
use crate::models::classes::requests::{ClassQueryParams, CreateClassRequest, UpdateClassRequest};
use crate::models::classes::responses::{ClassListResponse, ClassResponse};
use crate::services::ClassService;
use crate::utils::SafeClassIdI64;

// 懒加载的全局 CLASS_SERVICE 实例
static CLASS_SERVICE: Lazy<ClassService> = Lazy::new(ClassService::new_lazy);

// HTTP处理程序

/// 创建班级
///
/// teacher_id 必须指向角色为 teacher 的用户
#[utoipa::path(
    post,
    path = "/api/v1/classes",
    tag = "classes",
    request_body = CreateClassRequest,
    responses(
        (status = 201, description = "班级创建成功", body = ApiResponse<ClassResponse>),
        (status = 400, description = "班级代码非法或教师不存在"),
        (status = 409, description = "代码已存在或 teacher_id 不是教师"),
    )
)]
pub async fn create_class(
    req: HttpRequest,
    class_data: web::Json<CreateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .create_class(&req, class_data.into_inner())
        .await
}

/// 班级列表
#[utoipa::path(
    get,
    path = "/api/v1/classes",
    tag = "classes",
    params(
        ("page" = Option<i64>, Query, description = "页码，从 1 开始"),
        ("size" = Option<i64>, Query, description = "每页数量，最大 100"),
        ("teacher_id" = Option<i64>, Query, description = "按授课教师过滤"),
        ("search" = Option<String>, Query, description = "按代码或名称搜索"),
    ),
    responses(
        (status = 200, description = "查询成功", body = ApiResponse<ClassListResponse>),
    )
)]
pub async fn list_classes(
    req: HttpRequest,
    query: web::Query<ClassQueryParams>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.list_classes(&req, query.into_inner()).await
}

/// 按班级代码查询
#[utoipa::path(
    get,
    path = "/api/v1/classes/code/{code}",
    tag = "classes",
    params(("code" = String, Path, description = "班级代码，如 CS101")),
    responses(
        (status = 200, description = "查询成功", body = ApiResponse<ClassResponse>),
        (status = 404, description = "班级不存在"),
    )
)]
pub async fn get_class_by_code(
    req: HttpRequest,
    code: web::Path<String>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .get_class_by_code(&req, code.into_inner())
        .await
}

/// 班级详情
#[utoipa::path(
    get,
    path = "/api/v1/classes/{class_id}",
    tag = "classes",
    params(("class_id" = i64, Path, description = "班级 ID")),
    responses(
        (status = 200, description = "查询成功", body = ApiResponse<ClassResponse>),
        (status = 404, description = "班级不存在"),
    )
)]
pub async fn get_class(req: HttpRequest, class_id: SafeClassIdI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.get_class(&req, class_id.0).await
}

/// 更新班级
#[utoipa::path(
    put,
    path = "/api/v1/classes/{class_id}",
    tag = "classes",
    params(("class_id" = i64, Path, description = "班级 ID")),
    request_body = UpdateClassRequest,
    responses(
        (status = 200, description = "更新成功", body = ApiResponse<ClassResponse>),
        (status = 404, description = "班级不存在"),
        (status = 409, description = "代码冲突或新 teacher_id 不是教师"),
    )
)]
pub async fn update_class(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    update_data: web::Json<UpdateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .update_class(&req, class_id.0, update_data.into_inner())
        .await
}

/// 删除班级
#[utoipa::path(
    delete,
    path = "/api/v1/classes/{class_id}",
    tag = "classes",
    params(("class_id" = i64, Path, description = "班级 ID")),
    responses(
        (status = 200, description = "删除成功"),
        (status = 404, description = "班级不存在"),
    )
)]
pub async fn delete_class(req: HttpRequest, class_id: SafeClassIdI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.delete_class(&req, class_id.0).await
}

// 配置路由
pub fn configure_classes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes")
            .service(
                web::resource("")
                    .route(web::get().to(list_classes))
                    .route(web::post().to(create_class)),
            )
            .service(web::resource("/code/{code}").route(web::get().to(get_class_by_code)))
            .service(
                web::resource("/{class_id}")
                    .route(web::get().to(get_class))
                    .route(web::put().to(update_class))
                    .route(web::delete().to(delete_class)),
            ),
    );
}
