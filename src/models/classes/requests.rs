use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::common::PaginationQuery;

// 班级查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct ClassQueryParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub teacher_id: Option<i64>,
    pub search: Option<String>,
}

// 创建班级请求
//
// teacher_id 必须指向一个角色为 teacher 的用户，否则拒绝创建
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateClassRequest {
    pub code: String,
    pub title: String,
    pub description: Option<String>,
    pub teacher_id: i64,
}

// 更新班级请求
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateClassRequest {
    pub code: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub teacher_id: Option<i64>,
}

// 班级列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct ClassListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub teacher_id: Option<i64>,
    pub search: Option<String>,
}
