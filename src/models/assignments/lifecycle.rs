//! 作业生命周期状态机
//!
//! DRAFT → SUBMITTED → GRADED，状态只能向前推进。
//! 这里的转换函数都是同步的纯内存操作：先校验全部前置条件，
//! 全部通过后才修改字段，失败时作业保持原样。持久化由调用方负责。

use super::entities::{Assignment, AssignmentState, Grade};
use crate::errors::{Result, WorkflowError};
use crate::models::principals::entities::Principal;

/// 校验提交的作业内容，不允许为空
pub fn require_content(content: Option<String>) -> Result<String> {
    match content {
        Some(content) if !content.is_empty() => Ok(content),
        _ => Err(WorkflowError::invalid_state(
            "The assignment content cannot be null",
        )),
    }
}

/// 校验提交的成绩取值，必须属于 A/B/C/D
pub fn parse_grade(grade: Option<&str>) -> Result<Grade> {
    let raw = grade.ok_or_else(|| {
        WorkflowError::invalid_state("assignment with empty grade cannot be graded")
    })?;
    raw.parse::<Grade>()
        .map_err(|_| WorkflowError::invalid_state(format!("invalid grade: {raw}")))
}

impl Assignment {
    fn has_content(&self) -> bool {
        self.content.as_deref().is_some_and(|c| !c.is_empty())
    }

    fn transition(&mut self, next: AssignmentState) -> Result<()> {
        if next.rank() < self.state.rank() {
            return Err(WorkflowError::invalid_state(format!(
                "assignment cannot move from {} back to {}",
                self.state, next
            )));
        }
        self.state = next;
        Ok(())
    }

    /// 学生修改自己的草稿内容
    pub fn edit_content(&mut self, content: String, principal: &Principal) -> Result<()> {
        if principal.student_id() != Some(self.student_id) {
            return Err(WorkflowError::forbidden(
                "This assignment belongs to some other student",
            ));
        }
        if self.state != AssignmentState::Draft {
            return Err(WorkflowError::invalid_state(
                "only assignment in draft state can be edited",
            ));
        }
        self.content = Some(content);
        Ok(())
    }

    /// 学生将草稿提交给教师
    pub fn submit(&mut self, teacher_id: i64, principal: &Principal) -> Result<()> {
        if principal.student_id() != Some(self.student_id) {
            return Err(WorkflowError::forbidden(
                "This assignment belongs to some other student",
            ));
        }
        if !self.has_content() {
            return Err(WorkflowError::invalid_state(
                "assignment with empty content cannot be submitted",
            ));
        }
        if self.state != AssignmentState::Draft {
            return Err(WorkflowError::invalid_state(
                "only a draft assignment can be submitted",
            ));
        }

        self.transition(AssignmentState::Submitted)?;
        self.teacher_id = Some(teacher_id);
        Ok(())
    }

    /// 教师或校长评分（或重新评分）
    ///
    /// 教师只校验归属，不校验状态；校长不能给草稿评分。
    pub fn mark_grade(&mut self, grade: Grade, principal: &Principal) -> Result<()> {
        match principal {
            Principal::Teacher { teacher_id, .. } => {
                if self.teacher_id != Some(*teacher_id) {
                    return Err(WorkflowError::forbidden(
                        "cross grading of assignment is not allowed",
                    ));
                }
            }
            Principal::Principal { .. } => {
                if self.state == AssignmentState::Draft {
                    return Err(WorkflowError::invalid_state(
                        "Draft assignment cannot be graded by principal",
                    ));
                }
            }
            Principal::Student { .. } => {
                return Err(WorkflowError::forbidden("students cannot grade assignments"));
            }
        }

        self.transition(AssignmentState::Graded)?;
        self.grade = Some(grade);
        Ok(())
    }
}
