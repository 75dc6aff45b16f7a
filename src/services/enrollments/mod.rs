pub mod enroll;
pub mod list;
pub mod unenroll;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::enrollments::requests::{
    EnrollStudentRequest, EnrollmentQueryParams, UnenrollQueryParams,
};
use crate::storage::Storage;

pub struct EnrollmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl EnrollmentService {
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

    // 学生选课
    pub async fn enroll_student(
        &self,
        req: &HttpRequest,
        enroll_data: EnrollStudentRequest,
    ) -> ActixResult<HttpResponse> {
        enroll::enroll_student(self, req, enroll_data).await
    }

    // 列出选课记录
    pub async fn list_enrollments(
        &self,
        req: &HttpRequest,
        query: EnrollmentQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_enrollments(self, req, query).await
    }

    // 退课
    pub async fn unenroll_student(
        &self,
        req: &HttpRequest,
        query: UnenrollQueryParams,
    ) -> ActixResult<HttpResponse> {
        unenroll::unenroll_student(self, req, query).await
    }
}
