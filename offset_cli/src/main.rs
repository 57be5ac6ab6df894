use std::env::current_dir;
use std::path::PathBuf;
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};
use common::config::load_style::Format;
use common::err::CResult;
use common::log::tracing_factory::TracingFactory;
use common::pretty_util::to_string_pretty;
use connector::config::{read_config, ConnectorConfig};
use connector::MySQLOffsetOptions;

#[derive(Parser, Serialize, Debug, Clone)]
#[command(name = "offset-cli")]
#[command(version = "0.0.2")]
#[command(author = "rust-us")]
#[command(about = "Resolve the MySQL binlog start offset of a connector")]
#[command(long_about = None)]
pub(crate) struct CliArgs {
    /// 加载的配置文件路径
    #[arg(short, long, help = "Path to loaded configuration file", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// enable debug info
    #[arg(short, long, help = "enable debug mode", default_value_t = false)]
    pub debug: bool,

    #[arg(short, long, help = "output format: [yaml | json], default Yaml", default_value = "yaml")]
    pub format: String,

    ///////////////////////////////////////////////////
    // Offset Options //
    ///////////////////////////////////////////////////
    #[arg(long = "file", help = "binlog file, eg: mysql-bin.000003", value_name = "FILE_NAME")]
    pub file: Option<String>,

    #[arg(long = "position", help = "start position in binlog file", value_name = "POSITION", allow_negative_numbers = true)]
    pub position: Option<i32>,
}

fn main() -> CResult<()> {
    let args = CliArgs::parse();
    TracingFactory::init_log(args.debug);

    let format = Format::format(&args.format);
    debug!("args: {:?}", args);

    let config = load_config(&args)?;
    debug!("load offset: {}", config.offset());

    // merge offset settings
    let offset = merge(config.offset(), &args);
    info!("final offset: {}", offset);

    println!("{}", offset);
    println!("{}", to_string_pretty(&format, &offset));

    Ok(())
}

// 加载配置文件， 读取配置
fn load_config(args: &CliArgs) -> CResult<ConnectorConfig> {
    match get_config_path(args) {
        Some(path) => read_config(path),
        None => {
            debug!("no config file found, use default offset");
            Ok(ConnectorConfig::default())
        }
    }
}

fn get_config_path(args: &CliArgs) -> Option<PathBuf> {
    if let Some(config) = &args.config {
        return Some(config.clone());
    }

    // ./conf/connector.toml
    let mut pwd = current_dir().unwrap_or_else(|_| "/".into());
    pwd.push("conf");
    pwd.push("connector");
    pwd.set_extension("toml");

    if pwd.exists() {
        Some(pwd)
    } else {
        None
    }
}

/// 命令行参数优先于配置文件
fn merge(offset: &MySQLOffsetOptions, args: &CliArgs) -> MySQLOffsetOptions {
    let file = args.file.clone()
        .or_else(|| offset.get_source_offset_file().map(str::to_string));
    let position = args.position.or(offset.get_source_offset_position());

    MySQLOffsetOptions::new(file, position)
}
