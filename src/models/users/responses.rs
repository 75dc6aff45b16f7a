use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entities::User;
use crate::models::common::PaginationInfo;

// 单个用户响应
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub user: User,
}

// 用户列表响应
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserListResponse {
    pub items: Vec<User>,
    pub pagination: PaginationInfo,
}
