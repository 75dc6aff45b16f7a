use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entities::Class;
use crate::models::common::PaginationInfo;

// 单个班级响应
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClassResponse {
    pub class: Class,
}

// 班级列表响应
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClassListResponse {
    pub items: Vec<Class>,
    pub pagination: PaginationInfo,
}
