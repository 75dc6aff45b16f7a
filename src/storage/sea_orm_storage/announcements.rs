//! 公告存储操作

use super::SeaOrmStorage;
use crate::entity::announcements::{ActiveModel, Column, Entity as Announcements};
use crate::errors::{ClassHubError, Result};
use crate::models::{
    PaginationInfo,
    announcements::{
        entities::Announcement,
        requests::{AnnouncementListQuery, CreateAnnouncementRequest},
        responses::AnnouncementListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 发布公告
    pub async fn create_announcement_impl(
        &self,
        req: CreateAnnouncementRequest,
    ) -> Result<Announcement> {
        // 作者必须是班级的授课教师
        self.ensure_class_teacher(req.author_id, req.class_id)
            .await?;

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(req.class_id),
            author_id: Set(req.author_id),
            title: Set(req.title),
            body: Set(req.body),
            posted_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassHubError::database_operation(format!("发布公告失败: {e}")))?;

        Ok(result.into_announcement())
    }

    /// 通过 ID 获取公告
    pub async fn get_announcement_by_id_impl(
        &self,
        announcement_id: i64,
    ) -> Result<Option<Announcement>> {
        let result = Announcements::find_by_id(announcement_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassHubError::database_operation(format!("查询公告失败: {e}")))?;

        Ok(result.map(|m| m.into_announcement()))
    }

    /// 分页列出公告（按发布时间倒序）
    pub async fn list_announcements_with_pagination_impl(
        &self,
        query: AnnouncementListQuery,
    ) -> Result<AnnouncementListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Announcements::find();

        // 班级筛选
        if let Some(class_id) = query.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }

        // 最新公告在前
        select = select.order_by_desc(Column::PostedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| ClassHubError::database_operation(format!("查询公告总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ClassHubError::database_operation(format!("查询公告页数失败: {e}")))?;

        let announcements = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ClassHubError::database_operation(format!("查询公告列表失败: {e}")))?;

        Ok(AnnouncementListResponse {
            items: announcements
                .into_iter()
                .map(|m| m.into_announcement())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 删除公告
    pub async fn delete_announcement_impl(&self, announcement_id: i64) -> Result<bool> {
        let result = Announcements::delete_by_id(announcement_id)
            .exec(&self.db)
            .await
            .map_err(|e| ClassHubError::database_operation(format!("删除公告失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
