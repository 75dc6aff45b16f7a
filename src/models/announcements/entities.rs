use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// 公告：由班级的授课教师发布，选课学生可见
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Announcement {
    pub id: i64,
    pub class_id: i64,
    pub author_id: i64,
    pub title: String,
    pub body: String,
    pub posted_at: chrono::DateTime<chrono::Utc>,
}
