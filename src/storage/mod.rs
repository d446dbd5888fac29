use std::sync::Arc;

use sea_orm::DatabaseTransaction;

use crate::models::{
    assignments::entities::{Assignment, AssignmentState},
    directory::entities::{PrincipalAccount, Student, Teacher},
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 持久化存储
///
/// 除 `begin` 外，所有方法都在调用方传入的事务中执行；
/// 提交与回滚由调用方决定，存储层只负责写入（flush）。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    // 开启一个新的事务
    async fn begin(&self) -> Result<DatabaseTransaction>;

    /// 作业管理方法
    // 通过ID获取作业
    async fn get_assignment_by_id(
        &self,
        txn: &DatabaseTransaction,
        assignment_id: i64,
    ) -> Result<Option<Assignment>>;
    // 创建草稿作业
    async fn insert_assignment(
        &self,
        txn: &DatabaseTransaction,
        student_id: i64,
        content: String,
    ) -> Result<Assignment>;
    // 写回作业的可变字段（内容、教师、成绩、状态）
    async fn update_assignment(
        &self,
        txn: &DatabaseTransaction,
        assignment: &Assignment,
    ) -> Result<Assignment>;
    // 列出学生的作业
    async fn list_assignments_by_student(
        &self,
        txn: &DatabaseTransaction,
        student_id: i64,
    ) -> Result<Vec<Assignment>>;
    // 列出提交给教师的作业
    async fn list_assignments_by_teacher(
        &self,
        txn: &DatabaseTransaction,
        teacher_id: i64,
    ) -> Result<Vec<Assignment>>;
    // 列出某一状态的作业
    async fn list_assignments_by_state(
        &self,
        txn: &DatabaseTransaction,
        state: AssignmentState,
    ) -> Result<Vec<Assignment>>;

    /// 名册管理方法
    // 通过ID获取学生
    async fn get_student_by_id(
        &self,
        txn: &DatabaseTransaction,
        student_id: i64,
    ) -> Result<Option<Student>>;
    // 通过ID获取教师
    async fn get_teacher_by_id(
        &self,
        txn: &DatabaseTransaction,
        teacher_id: i64,
    ) -> Result<Option<Teacher>>;
    // 列出全部教师
    async fn list_teachers(&self, txn: &DatabaseTransaction) -> Result<Vec<Teacher>>;
    // 统计教师数量
    async fn count_teachers(&self, txn: &DatabaseTransaction) -> Result<u64>;
    // 创建学生档案
    async fn create_student(&self, txn: &DatabaseTransaction, user_id: i64) -> Result<Student>;
    // 创建教师档案
    async fn create_teacher(&self, txn: &DatabaseTransaction, user_id: i64) -> Result<Teacher>;
    // 创建校长档案
    async fn create_principal(
        &self,
        txn: &DatabaseTransaction,
        user_id: i64,
    ) -> Result<PrincipalAccount>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
