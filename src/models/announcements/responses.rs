use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entities::Announcement;
use crate::models::common::PaginationInfo;

// 单条公告响应
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnnouncementResponse {
    pub announcement: Announcement,
}

// 公告列表响应
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnnouncementListResponse {
    pub items: Vec<Announcement>,
    pub pagination: PaginationInfo,
}
