use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::RequirePrincipal;
use crate::models::assignments::requests::{SubmitAssignmentRequest, UpsertAssignmentRequest};
use crate::models::principals::entities::{Principal, PrincipalRole};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::AssignmentService;

// 懒加载的全局 AssignmentService 实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);

// 列出我的作业
pub async fn list_assignments(req: HttpRequest) -> ActixResult<HttpResponse> {
    let student_id = match RequirePrincipal::extract_principal(&req) {
        Some(Principal::Student { student_id, .. }) => student_id,
        _ => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取学生信息",
            )));
        }
    };

    ASSIGNMENT_SERVICE
        .list_student_assignments(&req, student_id)
        .await
}

// 创建或编辑草稿
pub async fn upsert_assignment(
    req: HttpRequest,
    body: web::Json<UpsertAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    let principal = match RequirePrincipal::extract_principal(&req) {
        Some(p) => p,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取学生信息",
            )));
        }
    };

    ASSIGNMENT_SERVICE
        .upsert_assignment(&req, principal, body.into_inner())
        .await
}

// 提交作业
pub async fn submit_assignment(
    req: HttpRequest,
    body: web::Json<SubmitAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    let principal = match RequirePrincipal::extract_principal(&req) {
        Some(p) => p,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取学生信息",
            )));
        }
    };

    ASSIGNMENT_SERVICE
        .submit_assignment(&req, principal, body.into_inner())
        .await
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/student")
            .wrap(RequirePrincipal::new(PrincipalRole::Student))
            .route("/assignments", web::get().to(list_assignments))
            .route("/assignments", web::post().to(upsert_assignment))
            .route("/assignments/submit", web::post().to(submit_assignment)),
    );
}
