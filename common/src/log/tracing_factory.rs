use std::sync::Once;

use tracing::Level;
use tracing_subscriber::{fmt, FmtSubscriber};

/// TracingFactory 全局只初始化一次
static INIT: Once = Once::new();

#[derive(Debug, Clone, Default)]
pub struct TracingFactory {

}

impl TracingFactory {
    pub fn init_log(debug: bool) {
        INIT.call_once(|| {
            let level = if debug {
                Level::DEBUG
            } else {
                Level::INFO
            };

            // Configure a custom event formatter
            let format = fmt::format()
                .with_thread_ids(true) // include the thread ID of the current thread
                .compact(); // use the `Compact` formatting style.

            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .event_format(format)
                .finish();

            if tracing::subscriber::set_global_default(subscriber).is_err() {
                eprintln!("Unable to set global default subscriber");
            }
        });
    }

    pub fn is_init() -> bool {
        INIT.is_completed()
    }
}
