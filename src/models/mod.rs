pub mod common;

pub mod announcements;
pub mod assignments;
pub mod classes;
pub mod enrollments;
pub mod submissions;
pub mod users;

pub use common::error_code::ErrorCode;
pub use common::pagination::{PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 应用启动时间，用于统计预处理耗时
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
