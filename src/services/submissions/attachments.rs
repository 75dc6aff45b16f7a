use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SubmissionService;
use crate::models::submissions::{
    requests::{AddAttachmentRequest, AttachmentQueryParams},
    responses::{AttachmentListResponse, AttachmentResponse},
};
use crate::models::{ApiResponse, ErrorCode};

pub async fn add_attachment(
    service: &SubmissionService,
    request: &HttpRequest,
    attachment_data: AddAttachmentRequest,
) -> ActixResult<HttpResponse> {
    if attachment_data.value.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParameter,
            "Attachment value must not be empty",
        )));
    }

    let storage = service.get_storage(request);

    match storage.add_attachment(attachment_data).await {
        Ok(attachment) => {
            info!(
                "Attachment {} added to submission {}",
                attachment.id, attachment.submission_id
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(AttachmentResponse { attachment }, "附件添加成功")))
        }
        Err(e) => {
            let msg = format!("Attachment creation failed: {e}");
            error!("{}", msg);
            // submission_id 指向不存在的提交
            if msg.contains("FOREIGN KEY constraint failed") {
                Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::InvalidParameter,
                    "Submission does not exist",
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

pub async fn list_attachments(
    service: &SubmissionService,
    request: &HttpRequest,
    query: AttachmentQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_attachments(query.submission_id).await {
        Ok(items) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(AttachmentListResponse { items }, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list attachments: {e}"),
            )),
        ),
    }
}

pub async fn delete_attachment(
    service: &SubmissionService,
    request: &HttpRequest,
    attachment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_attachment(attachment_id).await {
        Ok(true) => {
            info!("Attachment {} deleted", attachment_id);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success_empty("Attachment deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AttachmentNotFound,
            "Attachment not found",
        ))),
        Err(e) => {
            let msg = format!("Attachment deletion failed: {e}");
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
