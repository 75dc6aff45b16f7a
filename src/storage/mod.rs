use std::sync::Arc;

use crate::models::{
    announcements::{
        entities::Announcement,
        requests::{AnnouncementListQuery, CreateAnnouncementRequest},
        responses::AnnouncementListResponse,
    },
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::AssignmentListResponse,
    },
    classes::{
        entities::Class,
        requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest},
        responses::ClassListResponse,
    },
    enrollments::entities::Enrollment,
    submissions::{
        entities::{Submission, SubmissionAttachment},
        requests::{
            AddAttachmentRequest, CreateSubmissionRequest, GradeSubmissionRequest,
            SubmissionListQuery,
        },
        responses::SubmissionListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 列出用户（可按角色过滤）
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;

    /// 班级管理方法
    // 创建班级（校验 teacher_id 的教师角色）
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;
    // 通过ID获取班级信息
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    // 通过班级代码获取班级信息
    async fn get_class_by_code(&self, code: &str) -> Result<Option<Class>>;
    // 列出班级
    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse>;
    // 更新班级信息
    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>>;
    // 删除班级
    async fn delete_class(&self, class_id: i64) -> Result<bool>;

    /// 选课管理方法
    // 学生选课（校验 user_id 的学生角色）
    async fn enroll_student(&self, user_id: i64, class_id: i64) -> Result<Enrollment>;
    // 列出选课记录（可按班级/学生过滤）
    async fn list_enrollments(
        &self,
        class_id: Option<i64>,
        user_id: Option<i64>,
    ) -> Result<Vec<Enrollment>>;
    // 退课
    async fn unenroll_student(&self, user_id: i64, class_id: i64) -> Result<bool>;

    /// 作业管理方法
    // 创建作业
    async fn create_assignment(&self, assignment: CreateAssignmentRequest) -> Result<Assignment>;
    // 通过ID获取作业信息
    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>>;
    // 列出作业
    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse>;
    // 更新作业信息
    async fn update_assignment(
        &self,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;
    // 删除作业
    async fn delete_assignment(&self, assignment_id: i64) -> Result<bool>;

    /// 提交管理方法
    // 创建提交（校验学生角色与选课关系）
    async fn create_submission(&self, submission: CreateSubmissionRequest) -> Result<Submission>;
    // 通过ID获取提交信息
    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>>;
    // 列出提交
    async fn list_submissions_with_pagination(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse>;
    // 评分
    async fn grade_submission(
        &self,
        submission_id: i64,
        grade: GradeSubmissionRequest,
    ) -> Result<Option<Submission>>;
    // 删除提交
    async fn delete_submission(&self, submission_id: i64) -> Result<bool>;

    /// 附件管理方法
    // 添加附件
    async fn add_attachment(
        &self,
        attachment: AddAttachmentRequest,
    ) -> Result<SubmissionAttachment>;
    // 列出附件（可按提交过滤）
    async fn list_attachments(
        &self,
        submission_id: Option<i64>,
    ) -> Result<Vec<SubmissionAttachment>>;
    // 删除附件
    async fn delete_attachment(&self, attachment_id: i64) -> Result<bool>;

    /// 公告管理方法
    // 发布公告（校验作者为班级授课教师）
    async fn create_announcement(
        &self,
        announcement: CreateAnnouncementRequest,
    ) -> Result<Announcement>;
    // 通过ID获取公告
    async fn get_announcement_by_id(&self, announcement_id: i64) -> Result<Option<Announcement>>;
    // 列出公告（按发布时间倒序）
    async fn list_announcements_with_pagination(
        &self,
        query: AnnouncementListQuery,
    ) -> Result<AnnouncementListResponse>;
    // 删除公告
    async fn delete_announcement(&self, announcement_id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
