use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entities::{Submission, SubmissionAttachment};
use crate::models::common::PaginationInfo;

// 单条提交响应（含附件）
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmissionResponse {
    pub submission: Submission,
    pub attachments: Vec<SubmissionAttachment>,
}

// 提交列表响应
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmissionListResponse {
    pub items: Vec<Submission>,
    pub pagination: PaginationInfo,
}

// 单个附件响应
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AttachmentResponse {
    pub attachment: SubmissionAttachment,
}

// 附件列表响应
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AttachmentListResponse {
    pub items: Vec<SubmissionAttachment>,
}
