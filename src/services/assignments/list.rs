use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{AssignmentManager, AssignmentService};
use crate::services::{error_response, finish_transaction};

/// GET /student/assignments
pub async fn list_student_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let txn = match storage.begin().await {
        Ok(txn) => txn,
        Err(e) => return Ok(error_response(&e)),
    };

    let result = AssignmentManager::new(storage.as_ref(), &txn)
        .list_by_student(student_id)
        .await;

    Ok(finish_transaction(txn, result, "查询成功").await)
}

/// GET /teacher/assignments
pub async fn list_teacher_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
    teacher_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let txn = match storage.begin().await {
        Ok(txn) => txn,
        Err(e) => return Ok(error_response(&e)),
    };

    let result = AssignmentManager::new(storage.as_ref(), &txn)
        .list_by_teacher(teacher_id)
        .await;

    Ok(finish_transaction(txn, result, "查询成功").await)
}

/// GET /principal/assignments
pub async fn list_graded_submitted_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let txn = match storage.begin().await {
        Ok(txn) => txn,
        Err(e) => return Ok(error_response(&e)),
    };

    let result = AssignmentManager::new(storage.as_ref(), &txn)
        .list_graded_submitted()
        .await;

    Ok(finish_transaction(txn, result, "查询成功").await)
}
