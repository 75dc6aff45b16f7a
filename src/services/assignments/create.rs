use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AssignmentService;
use crate::models::assignments::{
    requests::CreateAssignmentRequest, responses::AssignmentResponse,
};
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_data: CreateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    if assignment_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParameter,
            "Assignment title must not be empty",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_assignment(assignment_data).await {
        Ok(assignment) => {
            info!(
                "Assignment {} created for class {}",
                assignment.id, assignment.class_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                AssignmentResponse { assignment },
                "作业创建成功",
            )))
        }
        Err(e) => {
            let msg = format!("Assignment creation failed: {e}");
            error!("{}", msg);
            // class_id 指向不存在的班级
            if msg.contains("FOREIGN KEY constraint failed") {
                Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::AssignmentCreationFailed,
                    "Class does not exist",
                )))
            } else {
                Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::AssignmentCreationFailed,
                    msg,
                )))
            }
        }
    }
}
