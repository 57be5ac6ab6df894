use std::fs;
use std::path::Path;

use getset::Getters;
use serde::{Deserialize, Serialize};
use tracing::debug;

use common::err::CResult;
use common::err::decode_error::ReError;

use crate::options::offset_options::MySQLOffsetOptions;

/// connector 配置文件
#[derive(Debug, Clone, Default, PartialEq, Getters, Serialize, Deserialize)]
pub struct ConnectorConfig {
    /// 起始位点, [offset] 缺省时 file 与 position 均未指定
    #[serde(default)]
    #[getset(get = "pub")]
    offset: MySQLOffsetOptions,
}

impl ConnectorConfig {
    pub fn new(offset: MySQLOffsetOptions) -> Self {
        ConnectorConfig {
            offset,
        }
    }
}

pub fn read_config<P: AsRef<Path>>(path: P) -> CResult<ConnectorConfig> {
    debug!("load connector config from {:?}", path.as_ref());

    let s = fs::read_to_string(path.as_ref())?;
    parse_config(s.as_str())
}

pub fn parse_config(content: &str) -> CResult<ConnectorConfig> {
    toml::from_str(content)
        .map_err(|e| ReError::ConfigFileParseErr(e.to_string()))
}
