use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::assignments::requests::{AssignmentListQuery, AssignmentQueryParams};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
    query: AssignmentQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = AssignmentListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        class_id: query.class_id,
    };

    match storage.list_assignments_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list assignments: {e}"),
            )),
        ),
    }
}
