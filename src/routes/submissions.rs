use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::ApiResponse;
use crate::models::submissions::requests::{
    AddAttachmentRequest, AttachmentQueryParams, CreateSubmissionRequest, GradeSubmissionRequest,
    SubmissionQueryParams,
};
use crate::models::submissions::responses::{
    AttachmentListResponse, AttachmentResponse, SubmissionListResponse, SubmissionResponse,
};
use crate::services::SubmissionService;
use crate::utils::{SafeAttachmentIdI64, SafeSubmissionIdI64};

// 懒加载的全局 SUBMISSION_SERVICE 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

// HTTP处理程序

/// 创建提交
///
/// 提交者必须是学生且已选修作业所属班级；
/// attempt_number 省略时自动取下一个次号
#[utoipa::path(
    post,
    path = "/api/v1/submissions",
    tag = "submissions",
    request_body = CreateSubmissionRequest,
    responses(
        (status = 201, description = "提交创建成功", body = ApiResponse<SubmissionResponse>),
        (status = 400, description = "作业或学生不存在"),
        (status = 409, description = "提交次号重复、提交者不是学生或未选课"),
    )
)]
pub async fn create_submission(
    req: HttpRequest,
    submission_data: web::Json<CreateSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .create_submission(&req, submission_data.into_inner())
        .await
}

/// 提交列表
#[utoipa::path(
    get,
    path = "/api/v1/submissions",
    tag = "submissions",
    params(
        ("page" = Option<i64>, Query, description = "页码，从 1 开始"),
        ("size" = Option<i64>, Query, description = "每页数量，最大 100"),
        ("assignment_id" = Option<i64>, Query, description = "按作业过滤"),
        ("student_id" = Option<i64>, Query, description = "按学生过滤"),
    ),
    responses(
        (status = 200, description = "查询成功", body = ApiResponse<SubmissionListResponse>),
    )
)]
pub async fn list_submissions(
    req: HttpRequest,
    query: web::Query<SubmissionQueryParams>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_submissions(&req, query.into_inner())
        .await
}

/// 提交详情（含附件）
#[utoipa::path(
    get,
    path = "/api/v1/submissions/{submission_id}",
    tag = "submissions",
    params(("submission_id" = i64, Path, description = "提交 ID")),
    responses(
        (status = 200, description = "查询成功", body = ApiResponse<SubmissionResponse>),
        (status = 404, description = "提交不存在"),
    )
)]
pub async fn get_submission(
    req: HttpRequest,
    submission_id: SafeSubmissionIdI64,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .get_submission(&req, submission_id.0)
        .await
}

/// 评分
#[utoipa::path(
    put,
    path = "/api/v1/submissions/{submission_id}/grade",
    tag = "submissions",
    params(("submission_id" = i64, Path, description = "提交 ID")),
    request_body = GradeSubmissionRequest,
    responses(
        (status = 200, description = "评分成功"),
        (status = 400, description = "分数非法"),
        (status = 404, description = "提交不存在"),
    )
)]
pub async fn grade_submission(
    req: HttpRequest,
    submission_id: SafeSubmissionIdI64,
    grade_data: web::Json<GradeSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .grade_submission(&req, submission_id.0, grade_data.into_inner())
        .await
}

/// 删除提交
#[utoipa::path(
    delete,
    path = "/api/v1/submissions/{submission_id}",
    tag = "submissions",
    params(("submission_id" = i64, Path, description = "提交 ID")),
    responses(
        (status = 200, description = "删除成功"),
        (status = 404, description = "提交不存在"),
    )
)]
pub async fn delete_submission(
    req: HttpRequest,
    submission_id: SafeSubmissionIdI64,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .delete_submission(&req, submission_id.0)
        .await
}

/// 添加附件
#[utoipa::path(
    post,
    path = "/api/v1/attachments",
    tag = "attachments",
    request_body = AddAttachmentRequest,
    responses(
        (status = 201, description = "附件添加成功", body = ApiResponse<AttachmentResponse>),
        (status = 400, description = "提交不存在或 value 为空"),
    )
)]
pub async fn add_attachment(
    req: HttpRequest,
    attachment_data: web::Json<AddAttachmentRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .add_attachment(&req, attachment_data.into_inner())
        .await
}

/// 附件列表
#[utoipa::path(
    get,
    path = "/api/v1/attachments",
    tag = "attachments",
    params(("submission_id" = Option<i64>, Query, description = "按提交过滤")),
    responses(
        (status = 200, description = "查询成功", body = ApiResponse<AttachmentListResponse>),
    )
)]
pub async fn list_attachments(
    req: HttpRequest,
    query: web::Query<AttachmentQueryParams>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_attachments(&req, query.into_inner())
        .await
}

/// 删除附件
#[utoipa::path(
    delete,
    path = "/api/v1/attachments/{attachment_id}",
    tag = "attachments",
    params(("attachment_id" = i64, Path, description = "附件 ID")),
    responses(
        (status = 200, description = "删除成功"),
        (status = 404, description = "附件不存在"),
    )
)]
pub async fn delete_attachment(
    req: HttpRequest,
    attachment_id: SafeAttachmentIdI64,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .delete_attachment(&req, attachment_id.0)
        .await
}

// 配置路由
pub fn configure_submissions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/submissions")
            .service(
                web::resource("")
                    .route(web::get().to(list_submissions))
                    .route(web::post().to(create_submission)),
            )
            .service(
                web::resource("/{submission_id}/grade").route(web::put().to(grade_submission)),
            )
            .service(
                web::resource("/{submission_id}")
                    .route(web::get().to(get_submission))
                    .route(web::delete().to(delete_submission)),
            ),
    );
    cfg.service(
        web::scope("/api/v1/attachments")
            .service(
                web::resource("")
                    .route(web::get().to(list_attachments))
                    .route(web::post().to(add_attachment)),
            )
            .service(
                web::resource("/{attachment_id}").route(web::delete().to(delete_attachment)),
            ),
    );
}
