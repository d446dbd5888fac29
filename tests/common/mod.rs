#![allow(dead_code)]

use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use rust_assignment_workflow::runtime::lifetime::startup::seed_directory;
use rust_assignment_workflow::storage::Storage;
use rust_assignment_workflow::storage::sea_orm_storage::SeaOrmStorage;
use sea_orm::{ConnectOptions, Database};

pub const STUDENT_COUNT: i64 = 2;
pub const TEACHER_COUNT: i64 = 5;

/// 内存 SQLite + 迁移，名册为空
pub async fn connect_storage() -> Arc<dyn Storage> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opt).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    Arc::new(SeaOrmStorage::from_connection(db))
}

/// 内存 SQLite + 迁移 + 名册（学生 1..=2，教师 1..=5）
pub async fn setup_storage() -> Arc<dyn Storage> {
    let storage = connect_storage().await;

    let txn = storage.begin().await.unwrap();
    for user_id in 1..=STUDENT_COUNT {
        storage.create_student(&txn, user_id).await.unwrap();
    }
    for user_id in 1..=TEACHER_COUNT {
        storage.create_teacher(&txn, 100 + user_id).await.unwrap();
    }
    storage.create_principal(&txn, 200).await.unwrap();
    txn.commit().await.unwrap();

    storage
}

/// 内存 SQLite + 迁移 + 启动时的默认名册（学生 1..=2，教师 1..=2）
pub async fn seeded_storage() -> Arc<dyn Storage> {
    let storage = connect_storage().await;
    assert!(seed_directory(&storage).await.unwrap());
    storage
}
