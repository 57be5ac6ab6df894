use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// MySQL binlog 消费的起始位点。
///
/// file 与 position 相互独立, 均可缺省, 不做任何校验。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct MySQLOffsetOptions {
    /// binlog file, 如 mysql-bin.000003
    source_offset_file: Option<String>,

    /// binlog file 消费的起始position
    source_offset_position: Option<i32>,
}

impl MySQLOffsetOptions {
    pub fn new(source_offset_file: Option<String>, source_offset_position: Option<i32>) -> Self {
        MySQLOffsetOptions {
            source_offset_file,
            source_offset_position,
        }
    }

    pub fn new_builder() -> MySQLOffsetOptionsBuilder {
        MySQLOffsetOptionsBuilder::default()
    }

    pub fn get_source_offset_file(&self) -> Option<&str> {
        self.source_offset_file.as_deref()
    }

    pub fn get_source_offset_position(&self) -> Option<i32> {
        self.source_offset_position
    }
}

impl Display for MySQLOffsetOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "MySQLOffsetOptions{{source_offset_file=")?;
        match &self.source_offset_file {
            Some(file) => write!(f, "'{}'", file)?,
            None => write!(f, "None")?,
        }

        write!(f, ", source_offset_position=")?;
        match self.source_offset_position {
            Some(position) => write!(f, "{}", position)?,
            None => write!(f, "None")?,
        }

        write!(f, "}}")
    }
}

/// MySQLOffsetOptions 的构造器, setter 可链式调用。
#[derive(Debug, Clone, Default)]
pub struct MySQLOffsetOptionsBuilder {
    source_offset_file: Option<String>,
    source_offset_position: Option<i32>,
}

impl MySQLOffsetOptionsBuilder {
    pub fn source_offset_file(mut self, val: impl Into<String>) -> Self {
        self.source_offset_file = Some(val.into());
        self
    }

    pub fn source_offset_position(mut self, val: i32) -> Self {
        self.source_offset_position = Some(val);
        self
    }

    /// 以当前已设置的值生成一个新的 MySQLOffsetOptions, 可多次调用
    pub fn build(&self) -> MySQLOffsetOptions {
        MySQLOffsetOptions::new(self.source_offset_file.clone(), self.source_offset_position)
    }
}
