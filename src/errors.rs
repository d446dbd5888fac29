//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! `NotFound`、`InvalidState`、`Forbidden` 是作业生命周期的三种失败类别，
//! 其余变体属于基础设施错误。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_workflow_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum WorkflowError {
            $($variant(String),)*
        }

        impl WorkflowError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(WorkflowError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(WorkflowError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(WorkflowError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl WorkflowError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        WorkflowError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_workflow_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Serialization("E004", "Serialization Error"),
    Validation("E005", "Validation Error"),
    Authentication("E006", "Authentication Error"),
    NotFound("E007", "Resource Not Found"),
    InvalidState("E008", "Invalid State"),
    Forbidden("E009", "Forbidden"),
}

impl WorkflowError {
    /// 是否属于作业生命周期的业务失败（而非基础设施错误）
    pub fn is_domain_failure(&self) -> bool {
        matches!(
            self,
            WorkflowError::NotFound(_) | WorkflowError::InvalidState(_) | WorkflowError::Forbidden(_)
        )
    }

    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for WorkflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for WorkflowError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for WorkflowError {
    fn from(err: sea_orm::DbErr) -> Self {
        WorkflowError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for WorkflowError {
    fn from(err: serde_json::Error) -> Self {
        WorkflowError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WorkflowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(WorkflowError::database_config("test").code(), "E001");
        assert_eq!(WorkflowError::not_found("test").code(), "E007");
        assert_eq!(WorkflowError::invalid_state("test").code(), "E008");
        assert_eq!(WorkflowError::forbidden("test").code(), "E009");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            WorkflowError::database_operation("test").error_type(),
            "Database Operation Error"
        );
        assert_eq!(
            WorkflowError::invalid_state("test").error_type(),
            "Invalid State"
        );
    }

    #[test]
    fn test_error_message() {
        let err = WorkflowError::forbidden("cross grading of assignment is not allowed");
        assert_eq!(err.message(), "cross grading of assignment is not allowed");
    }

    #[test]
    fn test_domain_failures_are_classified() {
        assert!(WorkflowError::not_found("x").is_domain_failure());
        assert!(WorkflowError::invalid_state("x").is_domain_failure());
        assert!(WorkflowError::forbidden("x").is_domain_failure());
        assert!(!WorkflowError::database_operation("x").is_domain_failure());
        assert!(!WorkflowError::authentication("x").is_domain_failure());
    }

    #[test]
    fn test_format_simple() {
        let err = WorkflowError::invalid_state("only a draft assignment can be submitted");
        let formatted = err.format_simple();
        assert!(formatted.contains("Invalid State"));
        assert!(formatted.contains("only a draft assignment can be submitted"));
    }

    #[test]
    fn test_db_err_conversion() {
        let err: WorkflowError = sea_orm::DbErr::Custom("boom".to_string()).into();
        assert_eq!(err.code(), "E003");
        assert!(err.message().contains("boom"));
    }
}
