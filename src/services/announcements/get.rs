use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnnouncementService;
use crate::models::announcements::responses::AnnouncementResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_announcement(
    service: &AnnouncementService,
    request: &HttpRequest,
    announcement_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_announcement_by_id(announcement_id).await {
        Ok(Some(announcement)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AnnouncementResponse { announcement },
            "Announcement retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AnnouncementNotFound,
            "Announcement not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get announcement: {e}"),
            )),
        ),
    }
}
