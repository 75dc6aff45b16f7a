use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entities::Assignment;
use crate::models::common::PaginationInfo;

// 单个作业响应
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AssignmentResponse {
    pub assignment: Assignment,
}

// 作业列表响应
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AssignmentListResponse {
    pub items: Vec<Assignment>,
    pub pagination: PaginationInfo,
}
