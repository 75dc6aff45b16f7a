use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::models::enrollments::{requests::EnrollmentQueryParams, responses::EnrollmentListResponse};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_enrollments(
    service: &EnrollmentService,
    request: &HttpRequest,
    query: EnrollmentQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .list_enrollments(query.class_id, query.user_id)
        .await
    {
        Ok(items) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(EnrollmentListResponse { items }, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list enrollments: {e}"),
            )),
        ),
    }
}
