use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::types::workshop::{Workshop, WorkshopTable};

/// 构建上下文
#[derive(Clone)]
pub struct BuildContext {
    /// 配置
    pub config: Config,
    /// 共享HTTP客户端，标题抓取复用同一连接池
    pub http: reqwest::Client,
    /// 工作坊总表，并发插入共享此锁
    pub table: Arc<RwLock<WorkshopTable>>,
}

impl BuildContext {
    /// 创建新的构建上下文
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        let table = Arc::new(RwLock::new(WorkshopTable::new()));

        Ok(Self {
            config,
            http,
            table,
        })
    }

    /// 在互斥保护下向对应桶追加一条记录
    pub async fn insert_workshop(&self, workshop: Workshop) {
        let mut table = self.table.write().await;
        table.insert(workshop);
    }

    /// 取出当前表的快照
    pub async fn snapshot(&self) -> WorkshopTable {
        self.table.read().await.clone()
    }
}
