//! 作业生命周期管理器
//!
//! 在调用方提供的事务中加载作业、执行状态机转换并写回。
//! 管理器只写入（flush），从不提交；所有失败原样向上传递。

use sea_orm::DatabaseTransaction;
use tracing::{debug, info};

use crate::errors::{Result, WorkflowError};
use crate::models::assignments::entities::{Assignment, AssignmentState};
use crate::models::assignments::lifecycle::{parse_grade, require_content};
use crate::models::principals::entities::Principal;
use crate::storage::Storage;

pub struct AssignmentManager<'a> {
    storage: &'a dyn Storage,
    txn: &'a DatabaseTransaction,
}

impl<'a> AssignmentManager<'a> {
    pub fn new(storage: &'a dyn Storage, txn: &'a DatabaseTransaction) -> Self {
        Self { storage, txn }
    }

    async fn load(&self, assignment_id: i64) -> Result<Assignment> {
        self.storage
            .get_assignment_by_id(self.txn, assignment_id)
            .await?
            .ok_or_else(|| WorkflowError::not_found("No assignment with this id was found"))
    }

    async fn require_student(&self, student_id: i64) -> Result<()> {
        self.storage
            .get_student_by_id(self.txn, student_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| WorkflowError::not_found("No student with this id was found"))
    }

    async fn require_teacher(&self, teacher_id: i64) -> Result<()> {
        self.storage
            .get_teacher_by_id(self.txn, teacher_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| WorkflowError::not_found("No teacher with this id was found"))
    }

    /// 创建草稿（无 id）或编辑草稿内容（有 id）
    pub async fn upsert(
        &self,
        assignment_id: Option<i64>,
        content: Option<String>,
        principal: &Principal,
    ) -> Result<Assignment> {
        let content = require_content(content)?;

        match assignment_id {
            Some(id) => {
                let mut assignment = self.load(id).await?;
                assignment.edit_content(content, principal)?;
                let updated = self.storage.update_assignment(self.txn, &assignment).await?;
                info!("Assignment {} draft content edited", updated.id);
                Ok(updated)
            }
            None => {
                let student_id = principal.student_id().ok_or_else(|| {
                    WorkflowError::forbidden("only a student can create an assignment")
                })?;
                self.require_student(student_id).await?;
                let created = self
                    .storage
                    .insert_assignment(self.txn, student_id, content)
                    .await?;
                info!(
                    "Assignment {} created as draft for student {}",
                    created.id, student_id
                );
                Ok(created)
            }
        }
    }

    /// 提交草稿给教师
    pub async fn submit(
        &self,
        assignment_id: i64,
        teacher_id: i64,
        principal: &Principal,
    ) -> Result<Assignment> {
        let mut assignment = self.load(assignment_id).await?;
        assignment.submit(teacher_id, principal)?;
        self.require_teacher(teacher_id).await?;

        let updated = self.storage.update_assignment(self.txn, &assignment).await?;
        info!(
            "Assignment {} submitted to teacher {}",
            updated.id, teacher_id
        );
        Ok(updated)
    }

    /// 评分或重新评分
    pub async fn mark_grade(
        &self,
        assignment_id: i64,
        grade: Option<&str>,
        principal: &Principal,
    ) -> Result<Assignment> {
        let mut assignment = self.load(assignment_id).await?;
        let grade = parse_grade(grade)?;
        let previous = assignment.state;
        assignment.mark_grade(grade, principal)?;

        let updated = self.storage.update_assignment(self.txn, &assignment).await?;
        info!(
            "Assignment {} graded {} by {} {} ({} -> {})",
            updated.id,
            grade,
            principal.role(),
            principal.user_id(),
            previous,
            updated.state
        );
        Ok(updated)
    }

    pub async fn list_by_student(&self, student_id: i64) -> Result<Vec<Assignment>> {
        debug!("Listing assignments of student {}", student_id);
        self.storage
            .list_assignments_by_student(self.txn, student_id)
            .await
    }

    pub async fn list_by_teacher(&self, teacher_id: i64) -> Result<Vec<Assignment>> {
        debug!("Listing assignments of teacher {}", teacher_id);
        self.storage
            .list_assignments_by_teacher(self.txn, teacher_id)
            .await
    }

    pub async fn list_by_state(&self, state: AssignmentState) -> Result<Vec<Assignment>> {
        debug!("Listing assignments in state {}", state);
        self.storage.list_assignments_by_state(self.txn, state).await
    }

    /// 已提交的在前，已评分的在后，各自保持存储顺序
    pub async fn list_graded_submitted(&self) -> Result<Vec<Assignment>> {
        let mut assignments = self.list_by_state(AssignmentState::Submitted).await?;
        assignments.extend(self.list_by_state(AssignmentState::Graded).await?);
        Ok(assignments)
    }
}
