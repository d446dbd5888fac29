//! 作业存储操作

use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::errors::{Result, WorkflowError};
use crate::models::assignments::entities::{Assignment, AssignmentState};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set, Unchanged,
};

impl SeaOrmStorage {
    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(
        &self,
        txn: &DatabaseTransaction,
        assignment_id: i64,
    ) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(assignment_id)
            .one(txn)
            .await
            .map_err(|e| WorkflowError::database_operation(format!("查询作业失败: {e}")))?;

        result.map(|m| m.into_assignment()).transpose()
    }

    /// 创建草稿作业
    pub async fn insert_assignment_impl(
        &self,
        txn: &DatabaseTransaction,
        student_id: i64,
        content: String,
    ) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(student_id),
            teacher_id: Set(None),
            content: Set(Some(content)),
            grade: Set(None),
            state: Set(AssignmentState::Draft.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(txn)
            .await
            .map_err(|e| WorkflowError::database_operation(format!("创建作业失败: {e}")))?;

        result.into_assignment()
    }

    /// 写回作业（学生与创建时间不可变，更新时间自动刷新）
    pub async fn update_assignment_impl(
        &self,
        txn: &DatabaseTransaction,
        assignment: &Assignment,
    ) -> Result<Assignment> {
        let model = ActiveModel {
            id: Unchanged(assignment.id),
            student_id: NotSet,
            teacher_id: Set(assignment.teacher_id),
            content: Set(assignment.content.clone()),
            grade: Set(assignment.grade.map(|g| g.to_string())),
            state: Set(assignment.state.to_string()),
            created_at: NotSet,
            updated_at: Set(chrono::Utc::now().timestamp()),
        };

        let result = model
            .update(txn)
            .await
            .map_err(|e| WorkflowError::database_operation(format!("更新作业失败: {e}")))?;

        result.into_assignment()
    }

    /// 列出学生的作业
    pub async fn list_assignments_by_student_impl(
        &self,
        txn: &DatabaseTransaction,
        student_id: i64,
    ) -> Result<Vec<Assignment>> {
        let results = Assignments::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(Column::Id)
            .all(txn)
            .await
            .map_err(|e| WorkflowError::database_operation(format!("查询学生作业失败: {e}")))?;

        results.into_iter().map(|m| m.into_assignment()).collect()
    }

    /// 列出提交给教师的作业
    pub async fn list_assignments_by_teacher_impl(
        &self,
        txn: &DatabaseTransaction,
        teacher_id: i64,
    ) -> Result<Vec<Assignment>> {
        let results = Assignments::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .order_by_asc(Column::Id)
            .all(txn)
            .await
            .map_err(|e| WorkflowError::database_operation(format!("查询教师作业失败: {e}")))?;

        results.into_iter().map(|m| m.into_assignment()).collect()
    }

    /// 列出某一状态的作业
    pub async fn list_assignments_by_state_impl(
        &self,
        txn: &DatabaseTransaction,
        state: AssignmentState,
    ) -> Result<Vec<Assignment>> {
        let results = Assignments::find()
            .filter(Column::State.eq(state.to_string()))
            .order_by_asc(Column::Id)
            .all(txn)
            .await
            .map_err(|e| WorkflowError::database_operation(format!("按状态查询作业失败: {e}")))?;

        results.into_iter().map(|m| m.into_assignment()).collect()
    }
}
