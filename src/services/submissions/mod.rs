pub mod attachments;
pub mod create;
pub mod delete;
pub mod detail;
pub mod grade;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::submissions::requests::{
    AddAttachmentRequest, AttachmentQueryParams, CreateSubmissionRequest, GradeSubmissionRequest,
    SubmissionQueryParams,
};
use crate::storage::Storage;

pub struct SubmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubmissionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 创建提交
    pub async fn create_submission(
        &self,
        req: &HttpRequest,
        submission_data: CreateSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_submission(self, req, submission_data).await
    }

    // 根据提交 ID 获取提交详情（含附件）
    pub async fn get_submission(
        &self,
        req: &HttpRequest,
        submission_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_submission(self, req, submission_id).await
    }

    // 获取提交列表
    pub async fn list_submissions(
        &self,
        req: &HttpRequest,
        query: SubmissionQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_submissions(self, req, query).await
    }

    // 评分
    pub async fn grade_submission(
        &self,
        req: &HttpRequest,
        submission_id: i64,
        grade_data: GradeSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        grade::grade_submission(self, req, submission_id, grade_data).await
    }

    // 根据提交 ID 删除提交
    pub async fn delete_submission(
        &self,
        req: &HttpRequest,
        submission_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_submission(self, req, submission_id).await
    }

    // 添加附件
    pub async fn add_attachment(
        &self,
        req: &HttpRequest,
        attachment_data: AddAttachmentRequest,
    ) -> ActixResult<HttpResponse> {
        attachments::add_attachment(self, req, attachment_data).await
    }

    // 列出附件
    pub async fn list_attachments(
        &self,
        req: &HttpRequest,
        query: AttachmentQueryParams,
    ) -> ActixResult<HttpResponse> {
        attachments::list_attachments(self, req, query).await
    }

    // 删除附件
    pub async fn delete_attachment(
        &self,
        req: &HttpRequest,
        attachment_id: i64,
    ) -> ActixResult<HttpResponse> {
        attachments::delete_attachment(self, req, attachment_id).await
    }
}
