use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SubmissionService;
use crate::models::submissions::requests::GradeSubmissionRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 教师评分
/// PUT /submissions/{submission_id}/grade
pub async fn grade_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
    grade_data: GradeSubmissionRequest,
) -> ActixResult<HttpResponse> {
    // 分数必须是有限数且非负
    if !grade_data.grade.is_finite() || grade_data.grade < 0.0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParameter,
            "Grade must be a non-negative number",
        )));
    }

    let storage = service.get_storage(request);

    match storage.grade_submission(submission_id, grade_data).await {
        Ok(Some(submission)) => {
            info!(
                "Submission {} graded: {:?}",
                submission.id, submission.grade
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "评分成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "Submission not found",
        ))),
        Err(e) => {
            let msg = format!("Grading failed: {e}");
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
