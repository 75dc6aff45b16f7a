use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::EnrollmentService;
use crate::models::enrollments::{requests::EnrollStudentRequest, responses::EnrollmentResponse};
use crate::models::{ApiResponse, ErrorCode};

pub async fn enroll_student(
    service: &EnrollmentService,
    request: &HttpRequest,
    enroll_data: EnrollStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .enroll_student(enroll_data.user_id, enroll_data.class_id)
        .await
    {
        Ok(enrollment) => {
            info!(
                "Student {} enrolled in class {}",
                enrollment.user_id, enrollment.class_id
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(EnrollmentResponse { enrollment }, "选课成功")))
        }
        Err(e) => {
            let msg = format!("Enrollment failed: {e}");
            error!("{}", msg);
            // user_id 角色校验失败
            if e.is_constraint_violation() {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::ConstraintViolation,
                    e.message(),
                )))
            } else if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::EnrollmentAlreadyExists,
                    "Student is already enrolled in this class",
                )))
            } else if msg.contains("FOREIGN KEY constraint failed") {
                Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::InvalidParameter,
                    "User or class does not exist",
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
