use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::ApiResponse;
use crate::models::announcements::requests::{
    AnnouncementQueryParams, CreateAnnouncementRequest,
};
use crate::models::announcements::responses::{AnnouncementListResponse, AnnouncementResponse};
use crate::services::AnnouncementService;
use crate::utils::SafeAnnouncementIdI64;

// 懒加载的全局 ANNOUNCEMENT_SERVICE 实例
static ANNOUNCEMENT_SERVICE: Lazy<AnnouncementService> = Lazy::new(AnnouncementService::new_lazy);

// HTTP处理程序

/// 发布公告
///
/// author_id 必须等于班级的 teacher_id
#[utoipa::path(
    post,
    path = "/api/v1/announcements",
    tag = "announcements",
    request_body = CreateAnnouncementRequest,
    responses(
        (status = 201, description = "公告发布成功", body = ApiResponse<AnnouncementResponse>),
        (status = 400, description = "标题/正文为空或班级不存在"),
        (status = 409, description = "作者不是班级的授课教师"),
    )
)]
pub async fn create_announcement(
    req: HttpRequest,
    announcement_data: web::Json<CreateAnnouncementRequest>,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE
        .create_announcement(&req, announcement_data.into_inner())
        .await
}

/// 公告列表（最新在前）
#[utoipa::path(
    get,
    path = "/api/v1/announcements",
    tag = "announcements",
    params(
        ("page" = Option<i64>, Query, description = "页码，从 1 开始"),
        ("size" = Option<i64>, Query, description = "每页数量，最大 100"),
        ("class_id" = Option<i64>, Query, description = "按班级过滤"),
    ),
    responses(
        (status = 200, description = "查询成功", body = ApiResponse<AnnouncementListResponse>),
    )
)]
pub async fn list_announcements(
    req: HttpRequest,
    query: web::Query<AnnouncementQueryParams>,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE
        .list_announcements(&req, query.into_inner())
        .await
}

/// 公告详情
#[utoipa::path(
    get,
    path = "/api/v1/announcements/{announcement_id}",
    tag = "announcements",
    params(("announcement_id" = i64, Path, description = "公告 ID")),
    responses(
        (status = 200, description = "查询成功", body = ApiResponse<AnnouncementResponse>),
        (status = 404, description = "公告不存在"),
    )
)]
pub async fn get_announcement(
    req: HttpRequest,
    announcement_id: SafeAnnouncementIdI64,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE
        .get_announcement(&req, announcement_id.0)
        .await
}

/// 删除公告
#[utoipa::path(
    delete,
    path = "/api/v1/announcements/{announcement_id}",
    tag = "announcements",
    params(("announcement_id" = i64, Path, description = "公告 ID")),
    responses(
        (status = 200, description = "删除成功"),
        (status = 404, description = "公告不存在"),
    )
)]
pub async fn delete_announcement(
    req: HttpRequest,
    announcement_id: SafeAnnouncementIdI64,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE
        .delete_announcement(&req, announcement_id.0)
        .await
}

// 配置路由
pub fn configure_announcements_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/announcements")
            .service(
                web::resource("")
                    .route(web::get().to(list_announcements))
                    .route(web::post().to(create_announcement)),
            )
            .service(
                web::resource("/{announcement_id}")
                    .route(web::get().to(get_announcement))
                    .route(web::delete().to(delete_announcement)),
            ),
    );
}
