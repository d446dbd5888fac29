use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{AssignmentManager, AssignmentService};
use crate::models::assignments::requests::UpsertAssignmentRequest;
use crate::models::principals::entities::Principal;
use crate::services::{error_response, finish_transaction};

/// POST /student/assignments
pub async fn upsert_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    principal: Principal,
    req: UpsertAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let txn = match storage.begin().await {
        Ok(txn) => txn,
        Err(e) => return Ok(error_response(&e)),
    };

    let result = AssignmentManager::new(storage.as_ref(), &txn)
        .upsert(req.id, req.content, &principal)
        .await;

    Ok(finish_transaction(txn, result, "作业已保存").await)
}
