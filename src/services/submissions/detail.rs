use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::models::submissions::responses::SubmissionResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 获取提交详情，附带其全部附件
pub async fn get_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let submission = match storage.get_submission_by_id(submission_id).await {
        Ok(Some(sub)) => sub,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "Submission not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get submission: {e}"),
                )),
            );
        }
    };

    match storage.list_attachments(Some(submission_id)).await {
        Ok(attachments) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SubmissionResponse {
                submission,
                attachments,
            },
            "Submission retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to load attachments: {e}"),
            )),
        ),
    }
}
