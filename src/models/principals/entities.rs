use serde::{Deserialize, Serialize};

use crate::errors::{Result, WorkflowError};

// 请求方角色
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PrincipalRole {
    Student,   // 学生
    Teacher,   // 教师
    Principal, // 校长
}

impl std::fmt::Display for PrincipalRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrincipalRole::Student => write!(f, "student"),
            PrincipalRole::Teacher => write!(f, "teacher"),
            PrincipalRole::Principal => write!(f, "principal"),
        }
    }
}

/// 已认证的请求方
///
/// 每个请求恰好属于一种角色，角色规则通过对变体的模式匹配来分派。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Principal {
    Student { user_id: i64, student_id: i64 },
    Teacher { user_id: i64, teacher_id: i64 },
    Principal { user_id: i64, principal_id: i64 },
}

impl Principal {
    pub fn role(&self) -> PrincipalRole {
        match self {
            Principal::Student { .. } => PrincipalRole::Student,
            Principal::Teacher { .. } => PrincipalRole::Teacher,
            Principal::Principal { .. } => PrincipalRole::Principal,
        }
    }

    pub fn user_id(&self) -> i64 {
        match self {
            Principal::Student { user_id, .. }
            | Principal::Teacher { user_id, .. }
            | Principal::Principal { user_id, .. } => *user_id,
        }
    }

    pub fn student_id(&self) -> Option<i64> {
        match self {
            Principal::Student { student_id, .. } => Some(*student_id),
            _ => None,
        }
    }

    pub fn teacher_id(&self) -> Option<i64> {
        match self {
            Principal::Teacher { teacher_id, .. } => Some(*teacher_id),
            _ => None,
        }
    }

    pub fn principal_id(&self) -> Option<i64> {
        match self {
            Principal::Principal { principal_id, .. } => Some(*principal_id),
            _ => None,
        }
    }

    /// 解析 `X-Principal` 请求头的 JSON 内容
    pub fn from_header_value(raw: &str) -> Result<Self> {
        let header: PrincipalHeader = serde_json::from_str(raw)
            .map_err(|e| WorkflowError::authentication(format!("malformed principal: {e}")))?;
        Principal::try_from(header)
    }
}

/// `X-Principal` 请求头的原始结构
#[derive(Debug, Clone, Deserialize)]
pub struct PrincipalHeader {
    pub user_id: i64,
    pub student_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub principal_id: Option<i64>,
}

impl TryFrom<PrincipalHeader> for Principal {
    type Error = WorkflowError;

    fn try_from(header: PrincipalHeader) -> Result<Self> {
        let user_id = header.user_id;
        match (header.student_id, header.teacher_id, header.principal_id) {
            (Some(student_id), None, None) => Ok(Principal::Student {
                user_id,
                student_id,
            }),
            (None, Some(teacher_id), None) => Ok(Principal::Teacher {
                user_id,
                teacher_id,
            }),
            (None, None, Some(principal_id)) => Ok(Principal::Principal {
                user_id,
                principal_id,
            }),
            (None, None, None) => Err(WorkflowError::authentication(
                "principal carries no student, teacher or principal id",
            )),
            _ => Err(WorkflowError::authentication(
                "principal must carry exactly one role id",
            )),
        }
    }
}
