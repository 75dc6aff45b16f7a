//! 交互式 API 文档
//!
//! 通过 utoipa 汇总各路由的 OpenAPI 描述，SwaggerUI 挂载在 /docs，
//! 原始文档位于 /api-docs/openapi.json。

use actix_web::{HttpResponse, web};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::models::announcements::entities::Announcement;
use crate::models::assignments::entities::Assignment;
use crate::models::classes::entities::Class;
use crate::models::enrollments::entities::Enrollment;
use crate::models::submissions::entities::{AttachmentKind, Submission, SubmissionAttachment};
use crate::models::users::entities::{User, UserRole};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ClassHub API",
        description = "学校教务管理系统：用户、班级、选课、作业、提交与公告"
    ),
    paths(
        crate::routes::users::create_user,
        crate::routes::users::list_users,
        crate::routes::users::get_user,
        crate::routes::users::update_user,
        crate::routes::users::delete_user,
        crate::routes::classes::create_class,
        crate::routes::classes::list_classes,
        crate::routes::classes::get_class_by_code,
        crate::routes::classes::get_class,
        crate::routes::classes::update_class,
        crate::routes::classes::delete_class,
        crate::routes::enrollments::enroll_student,
        crate::routes::enrollments::list_enrollments,
        crate::routes::enrollments::unenroll_student,
        crate::routes::assignments::create_assignment,
        crate::routes::assignments::list_assignments,
        crate::routes::assignments::get_assignment,
        crate::routes::assignments::update_assignment,
        crate::routes::assignments::delete_assignment,
        crate::routes::submissions::create_submission,
        crate::routes::submissions::list_submissions,
        crate::routes::submissions::get_submission,
        crate::routes::submissions::grade_submission,
        crate::routes::submissions::delete_submission,
        crate::routes::submissions::add_attachment,
        crate::routes::submissions::list_attachments,
        crate::routes::submissions::delete_attachment,
        crate::routes::announcements::create_announcement,
        crate::routes::announcements::list_announcements,
        crate::routes::announcements::get_announcement,
        crate::routes::announcements::delete_announcement,
    ),
    components(schemas(
        User,
        UserRole,
        Class,
        Enrollment,
        Assignment,
        Submission,
        SubmissionAttachment,
        AttachmentKind,
        Announcement,
    )),
    tags(
        (name = "users", description = "用户管理"),
        (name = "classes", description = "班级管理"),
        (name = "enrollments", description = "选课管理"),
        (name = "assignments", description = "作业管理"),
        (name = "submissions", description = "提交与评分"),
        (name = "attachments", description = "提交附件"),
        (name = "announcements", description = "班级公告"),
    )
)]
pub struct ApiDoc;

// 不带斜杠访问 /docs 时跳转到 SwaggerUI 首页
async fn docs_redirect() -> HttpResponse {
    HttpResponse::Found()
        .insert_header(("Location", "/docs/"))
        .finish()
}

// 配置文档路由
pub fn configure_docs_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/docs").route(web::get().to(docs_redirect)));
    cfg.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));
}
