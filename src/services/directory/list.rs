use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DirectoryService;
use crate::services::{error_response, finish_transaction};

/// GET /principal/teachers
pub async fn list_teachers(
    service: &DirectoryService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let txn = match storage.begin().await {
        Ok(txn) => txn,
        Err(e) => return Ok(error_response(&e)),
    };

    let result = storage.list_teachers(&txn).await;

    Ok(finish_transaction(txn, result, "查询成功").await)
}
