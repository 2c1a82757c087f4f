/// 内存数据库标记 (`DATABASE_PATH=memory`)
pub const MEMORY_DATABASE: &str = "memory";

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (启动时先加载 `.env`)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_HOST | 0.0.0.0 | 监听地址 |
/// | PORT | 4000 | HTTP 服务端口 |
/// | DATABASE_PATH | ./data/employees.db | RocksDB 目录，`memory` 为内存库 |
/// | DATABASE_NAMESPACE | ems | SurrealDB namespace |
/// | DATABASE_NAME | ems | SurrealDB database |
/// | CORS_ORIGIN | http://localhost:3000 | 允许的前端来源 |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_DIR | (未设置) | 日志文件目录 |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | 关闭超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// PORT=8080 DATABASE_PATH=memory cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 监听地址
    pub http_host: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 数据库路径
    pub database_path: String,
    pub database_namespace: String,
    pub database_name: String,
    /// 允许跨域访问的前端地址
    pub cors_origin: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// 关闭超时时间 (毫秒)
    pub shutdown_timeout_ms: u64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(4000),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "./data/employees.db".into()),
            database_namespace: std::env::var("DATABASE_NAMESPACE")
                .unwrap_or_else(|_| "ems".into()),
            database_name: std::env::var("DATABASE_NAME").unwrap_or_else(|_| "ems".into()),
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            shutdown_timeout_ms: std::env::var("SHUTDOWN_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(database_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.http_port = http_port;
        config
    }

    /// 是否使用内存数据库
    pub fn is_memory_database(&self) -> bool {
        self.database_path == MEMORY_DATABASE
    }

    /// 监听地址 "host:port"
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_overrides() {
        let config = Config::with_overrides(MEMORY_DATABASE, 4100);
        assert!(config.is_memory_database());
        assert_eq!(config.http_port, 4100);
        assert!(config.bind_addr().ends_with(":4100"));
    }

    #[test]
    fn test_file_database_is_not_memory() {
        let config = Config::with_overrides("./data/test.db", 4000);
        assert!(!config.is_memory_database());
    }
}
