use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AssignmentService;
use crate::models::assignments::{
    requests::UpdateAssignmentRequest, responses::AssignmentResponse,
};
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
    update_data: UpdateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_assignment(assignment_id, update_data).await {
        Ok(Some(assignment)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AssignmentResponse { assignment },
            "Assignment updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssignmentNotFound,
            "Assignment not found",
        ))),
        Err(e) => {
            let msg = format!("Assignment update failed: {e}");
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
