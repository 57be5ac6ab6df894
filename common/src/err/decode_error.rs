use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReError {
    #[error("io error: {0}")]
    IoError(#[from] io::Error),

    #[error("{0}")]
    String(String),

    /// 配置文件内容无法解析
    #[error("config file parse error: {0}")]
    ConfigFileParseErr(String),
}
