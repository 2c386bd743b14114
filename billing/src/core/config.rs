use std::path::PathBuf;

/// 对账配置 - 所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量 (或 `.env` 文件) 覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | BILLING_ORDERS_FILE | orders.json | 订单 JSON 文件 |
/// | BILLING_CONFIRMATIONS_FILE | confirmations.json | 付款确认 JSON 文件 |
/// | BILLING_LOG_LEVEL | info | 日志级别 |
/// | BILLING_LOG_DIR | (无) | 日志目录，设置后按天滚动写文件 |
/// | BILLING_CURRENCY_SYMBOL | ¥ | 金额展示货币符号 |
/// | BILLING_STRICT_DATES | false | 遇到非法离店日期时整体失败 |
///
/// # 示例
///
/// ```ignore
/// BILLING_ORDERS_FILE=/data/orders.json billing report
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 订单来源文件
    pub orders_file: PathBuf,
    /// 付款确认存储文件
    pub confirmations_file: PathBuf,
    pub log_level: String,
    /// 日志目录 (None 时输出到 stderr)
    pub log_dir: Option<String>,
    pub currency_symbol: String,
    /// true: 任意订单日期非法即报错; false: 剔除并在报告中列出
    pub strict_dates: bool,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            orders_file: std::env::var("BILLING_ORDERS_FILE")
                .unwrap_or_else(|_| "orders.json".into())
                .into(),
            confirmations_file: std::env::var("BILLING_CONFIRMATIONS_FILE")
                .unwrap_or_else(|_| "confirmations.json".into())
                .into(),
            log_level: std::env::var("BILLING_LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("BILLING_LOG_DIR")
                .ok()
                .filter(|s| !s.is_empty()),
            currency_symbol: std::env::var("BILLING_CURRENCY_SYMBOL")
                .unwrap_or_else(|_| "¥".into()),
            strict_dates: std::env::var("BILLING_STRICT_DATES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }

    /// 使用自定义文件路径覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(
        orders_file: impl Into<PathBuf>,
        confirmations_file: impl Into<PathBuf>,
    ) -> Self {
        let mut config = Self::from_env();
        config.orders_file = orders_file.into();
        config.confirmations_file = confirmations_file.into();
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
