use serde::Deserialize;
use utoipa::ToSchema;

use super::entities::AttachmentKind;
use crate::models::common::PaginationQuery;

// 提交查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct SubmissionQueryParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub assignment_id: Option<i64>,
    pub student_id: Option<i64>,
}

// 随提交内联创建的附件
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AttachmentInput {
    pub kind: AttachmentKind,
    pub value: String,
}

// 创建提交请求
//
// attempt_number 省略时由服务端取该学生对该作业的下一个次号；
// 显式给定时按原值写入，与唯一索引冲突则拒绝
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSubmissionRequest {
    pub assignment_id: i64,
    pub student_id: i64,
    pub attempt_number: Option<i32>,
    pub attachments: Option<Vec<AttachmentInput>>,
}

// 评分请求
#[derive(Debug, Deserialize, ToSchema)]
pub struct GradeSubmissionRequest {
    pub grade: f64,
    pub feedback: Option<String>,
}

// 添加附件请求
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddAttachmentRequest {
    pub submission_id: i64,
    pub kind: AttachmentKind,
    pub value: String,
}

// 附件查询参数
#[derive(Debug, Deserialize)]
pub struct AttachmentQueryParams {
    pub submission_id: Option<i64>,
}

// 提交列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct SubmissionListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub assignment_id: Option<i64>,
    pub student_id: Option<i64>,
}
