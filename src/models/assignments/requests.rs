use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::common::PaginationQuery;

// 作业查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct AssignmentQueryParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub class_id: Option<i64>,
}

// 创建作业请求
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAssignmentRequest {
    pub class_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_at: chrono::DateTime<chrono::Utc>,
}

// 更新作业请求
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAssignmentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_at: Option<chrono::DateTime<chrono::Utc>>,
}

// 作业列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct AssignmentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub class_id: Option<i64>,
}
