use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnnouncementService;
use crate::models::announcements::requests::{AnnouncementListQuery, AnnouncementQueryParams};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_announcements(
    service: &AnnouncementService,
    request: &HttpRequest,
    query: AnnouncementQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = AnnouncementListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        class_id: query.class_id,
    };

    match storage.list_announcements_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list announcements: {e}"),
            )),
        ),
    }
}
