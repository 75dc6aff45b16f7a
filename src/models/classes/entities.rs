use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Class {
    // 班级ID
    pub id: i64,
    // 班级代码（如 CS101）
    pub code: String,
    // 班级名称
    pub title: String,
    // 班级描述
    pub description: Option<String>,
    // 授课教师ID
    pub teacher_id: i64,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
