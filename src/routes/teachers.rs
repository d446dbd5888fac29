use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::RequirePrincipal;
use crate::models::assignments::requests::GradeAssignmentRequest;
use crate::models::principals::entities::{Principal, PrincipalRole};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::AssignmentService;

// 懒加载的全局 AssignmentService 实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);

// 列出提交给我的作业
pub async fn list_assignments(req: HttpRequest) -> ActixResult<HttpResponse> {
    let teacher_id = match RequirePrincipal::extract_principal(&req) {
        Some(Principal::Teacher { teacher_id, .. }) => teacher_id,
        _ => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取教师信息",
            )));
        }
    };

    ASSIGNMENT_SERVICE
        .list_teacher_assignments(&req, teacher_id)
        .await
}

// 评分
pub async fn grade_assignment(
    req: HttpRequest,
    body: web::Json<GradeAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    let principal = match RequirePrincipal::extract_principal(&req) {
        Some(p) => p,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取教师信息",
            )));
        }
    };

    ASSIGNMENT_SERVICE
        .grade_assignment(&req, principal, body.into_inner())
        .await
}

// 配置路由
pub fn configure_teacher_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/teacher")
            .wrap(RequirePrincipal::new(PrincipalRole::Teacher))
            .route("/assignments", web::get().to(list_assignments))
            .route("/assignments/grade", web::post().to(grade_assignment)),
    );
}
