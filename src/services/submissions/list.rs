use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::models::submissions::requests::{SubmissionListQuery, SubmissionQueryParams};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_submissions(
    service: &SubmissionService,
    request: &HttpRequest,
    query: SubmissionQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = SubmissionListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        assignment_id: query.assignment_id,
        student_id: query.student_id,
    };

    match storage.list_submissions_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list submissions: {e}"),
            )),
        ),
    }
}
