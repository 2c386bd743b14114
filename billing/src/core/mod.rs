//! 核心模块 - 配置与运行环境

pub mod config;

pub use config::Config;

use crate::utils::logger::init_logger_with_file;

/// 设置运行环境: 加载 `.env`，读取配置，初始化日志
pub fn setup_environment() -> Config {
    // .env 不存在时忽略
    let _ = dotenvy::dotenv();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}
