use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AnnouncementService;
use crate::models::announcements::{
    requests::CreateAnnouncementRequest, responses::AnnouncementResponse,
};
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_announcement(
    service: &AnnouncementService,
    request: &HttpRequest,
    announcement_data: CreateAnnouncementRequest,
) -> ActixResult<HttpResponse> {
    if announcement_data.title.trim().is_empty() || announcement_data.body.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParameter,
            "Announcement title and body must not be empty",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_announcement(announcement_data).await {
        Ok(announcement) => {
            info!(
                "Announcement {} posted to class {} by {}",
                announcement.id, announcement.class_id, announcement.author_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                AnnouncementResponse { announcement },
                "公告发布成功",
            )))
        }
        Err(e) => {
            let msg = format!("Announcement creation failed: {e}");
            error!("{}", msg);
            // 作者不是班级授课教师
            if e.is_constraint_violation() {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::ConstraintViolation,
                    e.message(),
                )))
            } else if msg.contains("FOREIGN KEY constraint failed") {
                Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::InvalidParameter,
                    "Class or author does not exist",
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
