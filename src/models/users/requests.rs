use serde::Deserialize;
use utoipa::ToSchema;

use super::entities::UserRole;
use crate::models::common::PaginationQuery;

// 用户查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct UserQueryParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub role: Option<UserRole>,
    pub search: Option<String>,
}

// 创建用户请求
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
}

// 更新用户请求
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<UserRole>,
}

// 用户列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct UserListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub role: Option<UserRole>,
    pub search: Option<String>,
}
