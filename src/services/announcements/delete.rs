use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AnnouncementService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_announcement(
    service: &AnnouncementService,
    request: &HttpRequest,
    announcement_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_announcement(announcement_id).await {
        Ok(true) => {
            info!("Announcement {} deleted", announcement_id);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success_empty("Announcement deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AnnouncementNotFound,
            "Announcement not found",
        ))),
        Err(e) => {
            let msg = format!("Announcement deletion failed: {e}");
            error!("{}", msg);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    msg,
                )),
            )
        }
    }
}
