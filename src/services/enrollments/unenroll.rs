use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::EnrollmentService;
use crate::models::enrollments::requests::UnenrollQueryParams;
use crate::models::{ApiResponse, ErrorCode};

pub async fn unenroll_student(
    service: &EnrollmentService,
    request: &HttpRequest,
    query: UnenrollQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .unenroll_student(query.user_id, query.class_id)
        .await
    {
        Ok(true) => {
            info!(
                "Student {} unenrolled from class {}",
                query.user_id, query.class_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Unenrolled successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EnrollmentNotFound,
            "Enrollment not found",
        ))),
        Err(e) => {
            let msg = format!("Unenrollment failed: {e}");
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
