use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::RequirePrincipal;
use crate::models::assignments::requests::GradeAssignmentRequest;
use crate::models::principals::entities::PrincipalRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{AssignmentService, DirectoryService};

// 懒加载的全局 Service 实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);
static DIRECTORY_SERVICE: Lazy<DirectoryService> = Lazy::new(DirectoryService::new_lazy);

// 列出已提交与已评分的作业
pub async fn list_assignments(req: HttpRequest) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_graded_submitted_assignments(&req)
        .await
}

// 评分或重新评分
pub async fn grade_assignment(
    req: HttpRequest,
    body: web::Json<GradeAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    let principal = match RequirePrincipal::extract_principal(&req) {
        Some(p) => p,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取校长信息",
            )));
        }
    };

    ASSIGNMENT_SERVICE
        .grade_assignment(&req, principal, body.into_inner())
        .await
}

// 列出教师
pub async fn list_teachers(req: HttpRequest) -> ActixResult<HttpResponse> {
    DIRECTORY_SERVICE.list_teachers(&req).await
}

// 配置路由
pub fn configure_principal_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/principal")
            .wrap(RequirePrincipal::new(PrincipalRole::Principal))
            .route("/assignments", web::get().to(list_assignments))
            .route("/assignments/grade", web::post().to(grade_assignment))
            .route("/teachers", web::get().to(list_teachers)),
    );
}
