pub mod grade;
pub mod list;
pub mod manager;
pub mod submit;
pub mod upsert;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

pub use manager::AssignmentManager;

use crate::models::assignments::requests::{
    GradeAssignmentRequest, SubmitAssignmentRequest, UpsertAssignmentRequest,
};
use crate::models::principals::entities::Principal;
use crate::storage::Storage;

pub struct AssignmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssignmentService {
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

    /// 创建或编辑草稿
    pub async fn upsert_assignment(
        &self,
        request: &HttpRequest,
        principal: Principal,
        req: UpsertAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        upsert::upsert_assignment(self, request, principal, req).await
    }

    /// 提交作业
    pub async fn submit_assignment(
        &self,
        request: &HttpRequest,
        principal: Principal,
        req: SubmitAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_assignment(self, request, principal, req).await
    }

    /// 评分或重新评分
    pub async fn grade_assignment(
        &self,
        request: &HttpRequest,
        principal: Principal,
        req: GradeAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        grade::grade_assignment(self, request, principal, req).await
    }

    /// 列出学生自己的作业
    pub async fn list_student_assignments(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_student_assignments(self, request, student_id).await
    }

    /// 列出提交给教师的作业
    pub async fn list_teacher_assignments(
        &self,
        request: &HttpRequest,
        teacher_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_teacher_assignments(self, request, teacher_id).await
    }

    /// 列出已提交与已评分的作业（校长视角）
    pub async fn list_graded_submitted_assignments(
        &self,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_graded_submitted_assignments(self, request).await
    }
}
