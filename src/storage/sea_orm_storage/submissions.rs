//! 提交与附件存储操作

use super::SeaOrmStorage;
use crate::entity::submission_attachments::{
    ActiveModel as AttachmentActiveModel, Column as AttachmentColumn,
    Entity as SubmissionAttachments,
};
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions};
use crate::errors::{ClassHubError, Result};
use crate::models::{
    PaginationInfo,
    submissions::{
        entities::{Submission, SubmissionAttachment},
        requests::{
            AddAttachmentRequest, AttachmentInput, CreateSubmissionRequest,
            GradeSubmissionRequest, SubmissionListQuery,
        },
        responses::SubmissionListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建提交
    ///
    /// attempt_number 省略时取该学生对该作业的下一个次号；
    /// 显式给定时按原值写入，唯一索引负责拒绝重复
    pub async fn create_submission_impl(&self, req: CreateSubmissionRequest) -> Result<Submission> {
        // 提交者必须是学生，且已选修作业所属班级
        self.ensure_student(req.student_id).await?;
        self.ensure_enrolled(req.student_id, req.assignment_id)
            .await?;

        let attempt_number = match req.attempt_number {
            Some(n) => n,
            None => {
                // 查询当前最大提交次号
                let max_attempt = Submissions::find()
                    .filter(Column::AssignmentId.eq(req.assignment_id))
                    .filter(Column::StudentId.eq(req.student_id))
                    .select_only()
                    .column_as(Column::AttemptNumber.max(), "max_attempt")
                    .into_tuple::<Option<i32>>()
                    .one(&self.db)
                    .await
                    .map_err(|e| {
                        ClassHubError::database_operation(format!("查询最大提交次号失败: {e}"))
                    })?
                    .flatten()
                    .unwrap_or(0);

                max_attempt + 1
            }
        };

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            assignment_id: Set(req.assignment_id),
            student_id: Set(req.student_id),
            attempt_number: Set(attempt_number),
            submitted_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassHubError::database_operation(format!("创建提交失败: {e}")))?;

        // 处理内联附件
        if let Some(attachments) = req.attachments {
            self.insert_attachments_impl(result.id, attachments).await?;
        }

        Ok(result.into_submission())
    }

    /// 通过 ID 获取提交
    pub async fn get_submission_by_id_impl(
        &self,
        submission_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(submission_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassHubError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 分页列出提交
    pub async fn list_submissions_with_pagination_impl(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Submissions::find();

        // 作业筛选
        if let Some(assignment_id) = query.assignment_id {
            select = select.filter(Column::AssignmentId.eq(assignment_id));
        }

        // 学生筛选
        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        // 排序
        select = select.order_by_desc(Column::SubmittedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| ClassHubError::database_operation(format!("查询提交总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ClassHubError::database_operation(format!("查询提交页数失败: {e}")))?;

        let submissions = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ClassHubError::database_operation(format!("查询提交列表失败: {e}")))?;

        Ok(SubmissionListResponse {
            items: submissions
                .into_iter()
                .map(|m| m.into_submission())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 评分
    pub async fn grade_submission_impl(
        &self,
        submission_id: i64,
        req: GradeSubmissionRequest,
    ) -> Result<Option<Submission>> {
        // 先检查提交是否存在
        let existing = self.get_submission_by_id_impl(submission_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(submission_id),
            grade: Set(Some(req.grade)),
            feedback: Set(req.feedback),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| ClassHubError::database_operation(format!("评分失败: {e}")))?;

        Ok(Some(result.into_submission()))
    }

    /// 删除提交
    pub async fn delete_submission_impl(&self, submission_id: i64) -> Result<bool> {
        let result = Submissions::delete_by_id(submission_id)
            .exec(&self.db)
            .await
            .map_err(|e| ClassHubError::database_operation(format!("删除提交失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 添加单个附件
    pub async fn add_attachment_impl(
        &self,
        req: AddAttachmentRequest,
    ) -> Result<SubmissionAttachment> {
        let now = chrono::Utc::now().timestamp();

        let model = AttachmentActiveModel {
            submission_id: Set(req.submission_id),
            kind: Set(req.kind.to_string()),
            value: Set(req.value),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassHubError::database_operation(format!("添加附件失败: {e}")))?;

        Ok(result.into_attachment())
    }

    /// 批量插入随提交内联的附件
    pub(crate) async fn insert_attachments_impl(
        &self,
        submission_id: i64,
        attachments: Vec<AttachmentInput>,
    ) -> Result<()> {
        let now = chrono::Utc::now().timestamp();

        for input in attachments {
            let model = AttachmentActiveModel {
                submission_id: Set(submission_id),
                kind: Set(input.kind.to_string()),
                value: Set(input.value),
                created_at: Set(now),
                ..Default::default()
            };

            model
                .insert(&self.db)
                .await
                .map_err(|e| ClassHubError::database_operation(format!("添加附件失败: {e}")))?;
        }

        Ok(())
    }

    /// 列出附件（可按提交过滤）
    pub async fn list_attachments_impl(
        &self,
        submission_id: Option<i64>,
    ) -> Result<Vec<SubmissionAttachment>> {
        let mut select = SubmissionAttachments::find();

        if let Some(submission_id) = submission_id {
            select = select.filter(AttachmentColumn::SubmissionId.eq(submission_id));
        }

        let results = select
            .order_by_asc(AttachmentColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| ClassHubError::database_operation(format!("查询附件失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_attachment()).collect())
    }

    /// 删除附件
    pub async fn delete_attachment_impl(&self, attachment_id: i64) -> Result<bool> {
        let result = SubmissionAttachments::delete_by_id(attachment_id)
            .exec(&self.db)
            .await
            .map_err(|e| ClassHubError::database_operation(format!("删除附件失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
