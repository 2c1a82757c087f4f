use thiserror::Error;

use crate::utils::AppError;

/// 服务器生命周期错误 (启动、监听、关闭)
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("数据库初始化失败: {0}")]
    Database(#[source] AppError),

    #[error("HTTP 服务 {addr} 异常退出: {source}")]
    Serve {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

/// 服务器层的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
