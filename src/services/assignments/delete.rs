use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AssignmentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_assignment(assignment_id).await {
        Ok(true) => {
            info!("Assignment {} deleted", assignment_id);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success_empty("Assignment deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssignmentNotFound,
            "Assignment not found",
        ))),
        Err(e) => {
            let msg = format!("Assignment deletion failed: {e}");
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
