use crate::storage::{Storage, create_storage};
use std::sync::Arc;
use tracing::{error, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 服务器启动前的预处理：初始化存储（含数据库迁移）
pub async fn prepare_server_startup() -> StartupContext {
    warn!("Initializing storage backend...");

    let storage = match create_storage().await {
        Ok(storage) => storage,
        Err(e) => {
            error!("Failed to initialize storage: {}", e);
            std::process::exit(1);
        }
    };

    StartupContext { storage }
}
