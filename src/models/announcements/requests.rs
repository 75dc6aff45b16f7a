use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::common::PaginationQuery;

// 公告查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct AnnouncementQueryParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub class_id: Option<i64>,
}

// 发布公告请求
//
// author_id 必须等于班级的 teacher_id
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAnnouncementRequest {
    pub class_id: i64,
    pub author_id: i64,
    pub title: String,
    pub body: String,
}

// 公告列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct AnnouncementListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub class_id: Option<i64>,
}
