use serde::Serialize;
use crate::err::decode_error::ReError;

/// 输出格式
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Format {
    Json,

    Yaml,

    None,
}

impl TryFrom<&str> for Format {
    type Error = ReError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "yaml" => {
                Ok(Format::Yaml)
            },
            "json" => {
                Ok(Format::Json)
            },
            _ => {
                Err(ReError::String(format!("Format error: {}", value)))
            }
        }
    }
}

impl Format {
    /// 无法识别的格式回退为 Yaml
    pub fn format(format: &str) -> Format {
        Format::try_from(format).unwrap_or(Format::Yaml)
    }
}
