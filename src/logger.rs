use std::sync::Once;

use log::info;

const LOG_ENV: &str = "vizassert=info";
const LOG_ENV_DEBUG: &str = "vizassert=debug";

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| init(LOG_ENV));
}

pub fn init_logger_debug() {
    INIT.call_once(|| init(LOG_ENV_DEBUG));
}

fn init(spec: &str) {
    flexi_logger::Logger::try_with_env_or_str(spec)
        .expect("Failed to initialize logger")
        .start()
        .expect("Failed to start logger");
    info!("Logger initialized! {spec}");
}
