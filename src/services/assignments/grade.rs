use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{AssignmentManager, AssignmentService};
use crate::models::assignments::requests::GradeAssignmentRequest;
use crate::models::principals::entities::Principal;
use crate::services::{error_response, finish_transaction};

/// POST /teacher/assignments/grade
/// POST /principal/assignments/grade
///
/// 角色规则由生命周期根据 `principal` 的变体决定，两个入口共用同一实现。
pub async fn grade_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    principal: Principal,
    req: GradeAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let txn = match storage.begin().await {
        Ok(txn) => txn,
        Err(e) => return Ok(error_response(&e)),
    };

    let result = AssignmentManager::new(storage.as_ref(), &txn)
        .mark_grade(req.id, req.grade.as_deref(), &principal)
        .await;

    Ok(finish_transaction(txn, result, "作业已评分").await)
}
