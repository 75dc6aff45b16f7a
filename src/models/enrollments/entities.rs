use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// 选课记录：学生与班级的关联
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Enrollment {
    pub user_id: i64,
    pub class_id: i64,
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
}
