//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod directory;

use crate::config::AppConfig;
use crate::errors::{Result, WorkflowError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ConnectOptions, Database, DatabaseConnection, DatabaseTransaction, TransactionTrait,
};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| WorkflowError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 包装已建立的连接（不运行迁移），测试与嵌入场景使用
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| WorkflowError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| WorkflowError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| WorkflowError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(WorkflowError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    assignments::entities::{Assignment, AssignmentState},
    directory::entities::{PrincipalAccount, Student, Teacher},
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    async fn begin(&self) -> Result<DatabaseTransaction> {
        self.db
            .begin()
            .await
            .map_err(|e| WorkflowError::database_operation(format!("开启事务失败: {e}")))
    }

    // 作业模块
    async fn get_assignment_by_id(
        &self,
        txn: &DatabaseTransaction,
        assignment_id: i64,
    ) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(txn, assignment_id).await
    }

    async fn insert_assignment(
        &self,
        txn: &DatabaseTransaction,
        student_id: i64,
        content: String,
    ) -> Result<Assignment> {
        self.insert_assignment_impl(txn, student_id, content).await
    }

    async fn update_assignment(
        &self,
        txn: &DatabaseTransaction,
        assignment: &Assignment,
    ) -> Result<Assignment> {
        self.update_assignment_impl(txn, assignment).await
    }

    async fn list_assignments_by_student(
        &self,
        txn: &DatabaseTransaction,
        student_id: i64,
    ) -> Result<Vec<Assignment>> {
        self.list_assignments_by_student_impl(txn, student_id).await
    }

    async fn list_assignments_by_teacher(
        &self,
        txn: &DatabaseTransaction,
        teacher_id: i64,
    ) -> Result<Vec<Assignment>> {
        self.list_assignments_by_teacher_impl(txn, teacher_id).await
    }

    async fn list_assignments_by_state(
        &self,
        txn: &DatabaseTransaction,
        state: AssignmentState,
    ) -> Result<Vec<Assignment>> {
        self.list_assignments_by_state_impl(txn, state).await
    }

    // 名册模块
    async fn get_student_by_id(
        &self,
        txn: &DatabaseTransaction,
        student_id: i64,
    ) -> Result<Option<Student>> {
        self.get_student_by_id_impl(txn, student_id).await
    }

    async fn get_teacher_by_id(
        &self,
        txn: &DatabaseTransaction,
        teacher_id: i64,
    ) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(txn, teacher_id).await
    }

    async fn list_teachers(&self, txn: &DatabaseTransaction) -> Result<Vec<Teacher>> {
        self.list_teachers_impl(txn).await
    }

    async fn count_teachers(&self, txn: &DatabaseTransaction) -> Result<u64> {
        self.count_teachers_impl(txn).await
    }

    async fn create_student(&self, txn: &DatabaseTransaction, user_id: i64) -> Result<Student> {
        self.create_student_impl(txn, user_id).await
    }

    async fn create_teacher(&self, txn: &DatabaseTransaction, user_id: i64) -> Result<Teacher> {
        self.create_teacher_impl(txn, user_id).await
    }

    async fn create_principal(
        &self,
        txn: &DatabaseTransaction,
        user_id: i64,
    ) -> Result<PrincipalAccount> {
        self.create_principal_impl(txn, user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("sqlite://data.db").unwrap(),
            "sqlite://data.db"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("assignments.db").unwrap(),
            "sqlite://assignments.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://u:p@localhost/workflow").unwrap(),
            "postgres://u:p@localhost/workflow"
        );
        assert!(matches!(
            SeaOrmStorage::build_database_url("redis://localhost"),
            Err(WorkflowError::DatabaseConfig(_))
        ));
    }
}
