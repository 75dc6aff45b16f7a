use serde::Deserialize;
use utoipa::ToSchema;

// 选课请求
//
// user_id 必须指向一个角色为 student 的用户
#[derive(Debug, Deserialize, ToSchema)]
pub struct EnrollStudentRequest {
    pub user_id: i64,
    pub class_id: i64,
}

// 选课查询参数（按班级/学生过滤）
#[derive(Debug, Deserialize)]
pub struct EnrollmentQueryParams {
    pub class_id: Option<i64>,
    pub user_id: Option<i64>,
}

// 退课参数（复合主键定位）
#[derive(Debug, Deserialize)]
pub struct UnenrollQueryParams {
    pub user_id: i64,
    pub class_id: i64,
}
