//! 数据模型定义
//!
//! 业务实体、请求参数与统一响应结构。

pub mod assignments;
pub mod common;
pub mod directory;
pub mod principals;

pub use common::ApiResponse;

use serde::Serialize;

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误码
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误 1xxx
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,

    // 作业错误 2xxx
    AssignmentNotFound = 2001,
    AssignmentInvalidState = 2002,
    AssignmentPermissionDenied = 2003,

    // 服务端错误 5xxx
    InternalServerError = 5000,
}
