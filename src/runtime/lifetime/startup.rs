use crate::config::AppConfig;
use crate::errors::Result;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 初始化示例名册
/// 如果数据库中没有任何教师，则写入 2 名学生、2 名教师和 1 名校长
pub async fn seed_directory(storage: &Arc<dyn Storage>) -> Result<bool> {
    let txn = storage.begin().await?;

    let count = storage.count_teachers(&txn).await?;
    if count > 0 {
        debug!(
            "Directory already has {} teacher(s), skipping directory seed",
            count
        );
        txn.rollback().await?;
        return Ok(false);
    }

    info!("No teachers found in database, seeding directory...");
    for user_id in [1, 2] {
        let student = storage.create_student(&txn, user_id).await?;
        debug!("Seeded student {} (user {})", student.id, student.user_id);
    }
    for user_id in [3, 4] {
        let teacher = storage.create_teacher(&txn, user_id).await?;
        debug!("Seeded teacher {} (user {})", teacher.id, teacher.user_id);
    }
    let principal = storage.create_principal(&txn, 5).await?;
    debug!(
        "Seeded principal {} (user {})",
        principal.id, principal.user_id
    );

    txn.commit().await?;
    info!("Directory seeded successfully");
    Ok(true)
}

/// 准备服务器启动的上下文
/// 包括存储初始化、数据库迁移和名册初始化
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    if AppConfig::get().database.seed_directory {
        if let Err(e) = seed_directory(&storage).await {
            warn!("Failed to seed directory: {}, continuing without seed", e);
        }
    }

    StartupContext { storage }
}
