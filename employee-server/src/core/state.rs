use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::{Config, Result, ServerError};
use crate::db::DbService;
use crate::services::EmployeeService;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 数据库句柄在启动时创建一次并显式传入，不存在全局连接。
/// `Surreal<Db>` 内部是引用计数，Clone 成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | employees | EmployeeService | 员工业务服务 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// 员工业务服务
    pub employees: EmployeeService,
}

impl ServerState {
    /// 用已打开的数据库创建状态
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        let employees = EmployeeService::new(db.clone());
        Self {
            config,
            db,
            employees,
        }
    }

    /// 初始化服务器状态
    ///
    /// 打开数据库 (RocksDB 或内存) 并应用 schema。
    /// 数据库无法打开时返回错误，由调用方终止进程。
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db_service = DbService::new(config)
            .await
            .map_err(ServerError::Database)?;

        Ok(Self::new(config.clone(), db_service.db))
    }
}
