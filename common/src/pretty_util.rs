use std::fmt::Debug;
use serde::Serialize;
use crate::config::load_style::Format;

pub fn to_string_pretty<T: Sized + Serialize + Debug>(f: &Format, val: &T) -> String {
    match f {
        Format::Json => {
            match serde_json::to_string_pretty(val) {
                Ok(v) => v,
                Err(_) => format!("to_string_pretty Json error:{:?}", val),
            }
        },
        Format::Yaml => {
            match serde_yaml::to_string(val) {
                Ok(v) => v,
                Err(_) => format!("to_string_pretty Yaml error:{:?}", val),
            }
        },
        Format::None => {
            format!("{:?}", val)
        }
    }
}
