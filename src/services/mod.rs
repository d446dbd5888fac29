pub mod assignments;
pub mod directory;

pub use assignments::AssignmentService;
pub use directory::DirectoryService;

use actix_web::HttpResponse;
use sea_orm::DatabaseTransaction;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::errors::{Result, WorkflowError};
use crate::models::{ApiResponse, ErrorCode};

/// 将错误映射为 HTTP 响应
///
/// NotFound → 404，InvalidState → 400，Forbidden → 403，其余为服务端错误。
pub(crate) fn error_response(err: &WorkflowError) -> HttpResponse {
    match err {
        WorkflowError::NotFound(msg) => HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::AssignmentNotFound, msg)),
        WorkflowError::InvalidState(msg) => HttpResponse::BadRequest().json(
            ApiResponse::error_empty(ErrorCode::AssignmentInvalidState, msg),
        ),
        WorkflowError::Forbidden(msg) => HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::AssignmentPermissionDenied,
            msg,
        )),
        WorkflowError::Validation(msg) => {
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        }
        WorkflowError::Authentication(msg) => HttpResponse::Unauthorized()
            .json(ApiResponse::error_empty(ErrorCode::Unauthorized, msg)),
        other => {
            error!("{}", other);
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                other.message(),
            ))
        }
    }
}

/// 结束请求事务：成功时提交并返回数据，失败时回滚并返回对应错误
pub(crate) async fn finish_transaction<T: Serialize>(
    txn: DatabaseTransaction,
    result: Result<T>,
    message: &str,
) -> HttpResponse {
    match result {
        Ok(data) => match txn.commit().await {
            Ok(()) => HttpResponse::Ok().json(ApiResponse::success(data, message)),
            Err(e) => error_response(&WorkflowError::database_operation(format!(
                "提交事务失败: {e}"
            ))),
        },
        Err(err) => {
            if let Err(e) = txn.rollback().await {
                warn!("Failed to roll back transaction: {}", e);
            }
            if err.is_domain_failure() {
                info!("Request rejected: {}", err);
            }
            error_response(&err)
        }
    }
}
