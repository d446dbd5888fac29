//! 名册存储操作（学生、教师、校长）

use super::SeaOrmStorage;
use crate::entity::principals::ActiveModel as PrincipalActiveModel;
use crate::entity::students::{ActiveModel as StudentActiveModel, Entity as Students};
use crate::entity::teachers::{
    ActiveModel as TeacherActiveModel, Column as TeacherColumn, Entity as Teachers,
};
use crate::errors::{Result, WorkflowError};
use crate::models::directory::entities::{PrincipalAccount, Student, Teacher};
use sea_orm::{ActiveModelTrait, DatabaseTransaction, EntityTrait, PaginatorTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(
        &self,
        txn: &DatabaseTransaction,
        student_id: i64,
    ) -> Result<Option<Student>> {
        let result = Students::find_by_id(student_id)
            .one(txn)
            .await
            .map_err(|e| WorkflowError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过 ID 获取教师
    pub async fn get_teacher_by_id_impl(
        &self,
        txn: &DatabaseTransaction,
        teacher_id: i64,
    ) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(teacher_id)
            .one(txn)
            .await
            .map_err(|e| WorkflowError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 列出全部教师
    pub async fn list_teachers_impl(&self, txn: &DatabaseTransaction) -> Result<Vec<Teacher>> {
        let results = Teachers::find()
            .order_by_asc(TeacherColumn::Id)
            .all(txn)
            .await
            .map_err(|e| WorkflowError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_teacher()).collect())
    }

    /// 统计教师数量
    pub async fn count_teachers_impl(&self, txn: &DatabaseTransaction) -> Result<u64> {
        Teachers::find()
            .count(txn)
            .await
            .map_err(|e| WorkflowError::database_operation(format!("统计教师数量失败: {e}")))
    }

    /// 创建学生档案
    pub async fn create_student_impl(
        &self,
        txn: &DatabaseTransaction,
        user_id: i64,
    ) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();
        let model = StudentActiveModel {
            user_id: Set(user_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(txn)
            .await
            .map_err(|e| WorkflowError::database_operation(format!("创建学生失败: {e}")))?;

        Ok(result.into_student())
    }

    /// 创建教师档案
    pub async fn create_teacher_impl(
        &self,
        txn: &DatabaseTransaction,
        user_id: i64,
    ) -> Result<Teacher> {
        let now = chrono::Utc::now().timestamp();
        let model = TeacherActiveModel {
            user_id: Set(user_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(txn)
            .await
            .map_err(|e| WorkflowError::database_operation(format!("创建教师失败: {e}")))?;

        Ok(result.into_teacher())
    }

    /// 创建校长档案
    pub async fn create_principal_impl(
        &self,
        txn: &DatabaseTransaction,
        user_id: i64,
    ) -> Result<PrincipalAccount> {
        let now = chrono::Utc::now().timestamp();
        let model = PrincipalActiveModel {
            user_id: Set(user_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(txn)
            .await
            .map_err(|e| WorkflowError::database_operation(format!("创建校长失败: {e}")))?;

        Ok(result.into_principal_account())
    }
}
