use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SubmissionService;
use crate::errors::ClassHubError;
use crate::models::submissions::requests::CreateSubmissionRequest;
use crate::models::submissions::responses::SubmissionResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use std::sync::Arc;

pub async fn create_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_data: CreateSubmissionRequest,
) -> ActixResult<HttpResponse> {
    // 显式给定的提交次号必须为正
    if let Some(n) = submission_data.attempt_number
        && n < 1
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParameter,
            "attempt_number must be positive",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_submission(submission_data).await {
        Ok(submission) => {
            info!(
                "Submission {} created (assignment {}, student {}, attempt {})",
                submission.id,
                submission.assignment_id,
                submission.student_id,
                submission.attempt_number
            );
            let attachments = load_attachments(&storage, submission.id).await;
            Ok(HttpResponse::Created().json(ApiResponse::success(
                SubmissionResponse {
                    submission,
                    attachments,
                },
                "提交创建成功",
            )))
        }
        Err(e) => Ok(handle_submission_create_error(&e)),
    }
}

async fn load_attachments(
    storage: &Arc<dyn Storage>,
    submission_id: i64,
) -> Vec<crate::models::submissions::entities::SubmissionAttachment> {
    storage
        .list_attachments(Some(submission_id))
        .await
        .unwrap_or_default()
}

/// 错误响应辅助函数
fn handle_submission_create_error(e: &ClassHubError) -> HttpResponse {
    let msg = format!("Submission creation failed: {e}");
    error!("{}", msg);
    // 角色或选课约束校验失败
    if e.is_constraint_violation() {
        HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::ConstraintViolation,
            e.message(),
        ))
    } else if msg.contains("UNIQUE constraint failed") {
        HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::SubmissionConflict,
            "A submission with this attempt number already exists",
        ))
    } else if msg.contains("FOREIGN KEY constraint failed") {
        HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParameter,
            "Assignment or student does not exist",
        ))
    } else {
        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            msg,
        ))
    }
}
