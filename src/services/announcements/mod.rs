pub mod create;
pub mod delete;
pub mod get;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::announcements::requests::{
    AnnouncementQueryParams, CreateAnnouncementRequest,
};
use crate::storage::Storage;

pub struct AnnouncementService {
    storage: Option<Arc<dyn Storage>>,
}

impl AnnouncementService {
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

    // 发布公告
    pub async fn create_announcement(
        &self,
        req: &HttpRequest,
        announcement_data: CreateAnnouncementRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_announcement(self, req, announcement_data).await
    }

    // 根据公告 ID 获取公告
    pub async fn get_announcement(
        &self,
        req: &HttpRequest,
        announcement_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_announcement(self, req, announcement_id).await
    }

    // 获取公告列表
    pub async fn list_announcements(
        &self,
        req: &HttpRequest,
        query: AnnouncementQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_announcements(self, req, query).await
    }

    // 根据公告 ID 删除公告
    pub async fn delete_announcement(
        &self,
        req: &HttpRequest,
        announcement_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_announcement(self, req, announcement_id).await
    }
}
