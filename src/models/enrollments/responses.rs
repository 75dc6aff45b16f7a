use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entities::Enrollment;

// 单条选课记录响应
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EnrollmentResponse {
    pub enrollment: Enrollment,
}

// 选课列表响应（选课记录总量有限，不分页）
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EnrollmentListResponse {
    pub items: Vec<Enrollment>,
}
