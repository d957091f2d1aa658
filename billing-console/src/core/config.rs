use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};
use shared::models::FeeRateCap;
use std::str::FromStr;

use crate::anticipation::DEFAULT_HORIZON_DAYS;

/// 可用余额默认值 (R$ 23.145,00)
const DEFAULT_AVAILABLE_BALANCE: Decimal = Decimal::from_parts(2314500, 0, 0, false, 2);

/// 控制台配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志目录，未设置时只输出到终端 |
/// | ANTICIPATION_DEFAULT_HORIZON_DAYS | 30 | 默认预支天数 |
/// | ANTICIPATION_FEE_RATE_CAP | unbounded | 费率上限策略: unbounded \| clamp |
/// | ANTICIPATION_AVAILABLE_BALANCE | 23145.00 | 可预支余额 |
///
/// # 示例
///
/// ```ignore
/// LOG_LEVEL=debug ANTICIPATION_FEE_RATE_CAP=clamp cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别 (tracing EnvFilter 语法)
    pub log_level: String,
    /// 日志文件目录
    pub log_dir: Option<String>,
    /// 预支模拟配置
    pub anticipation: AnticipationConfig,
}

/// 预支模拟配置
#[derive(Debug, Clone, PartialEq)]
pub struct AnticipationConfig {
    /// 未选择日期时使用的天数
    pub default_horizon_days: u32,
    /// 费率上限策略
    pub fee_rate_cap: FeeRateCap,
    /// 可预支余额，金额为空时用于显示
    pub available_balance: Decimal,
}

impl Default for AnticipationConfig {
    fn default() -> Self {
        Self {
            default_horizon_days: DEFAULT_HORIZON_DAYS,
            fee_rate_cap: FeeRateCap::Unbounded,
            available_balance: DEFAULT_AVAILABLE_BALANCE,
        }
    }
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 未设置的变量使用默认值；已设置但无法解析的预支变量返回 `ConfigError`
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 从任意键值来源加载配置 (测试时可传入 HashMap)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let defaults = AnticipationConfig::default();
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Ok(Self {
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: var("LOG_DIR"),
            anticipation: AnticipationConfig {
                default_horizon_days: parse_var(
                    "ANTICIPATION_DEFAULT_HORIZON_DAYS",
                    var("ANTICIPATION_DEFAULT_HORIZON_DAYS"),
                    |v| v.trim().parse().ok(),
                )?
                .unwrap_or(defaults.default_horizon_days),
                fee_rate_cap: parse_var(
                    "ANTICIPATION_FEE_RATE_CAP",
                    var("ANTICIPATION_FEE_RATE_CAP"),
                    parse_fee_rate_cap,
                )?
                .unwrap_or(defaults.fee_rate_cap),
                available_balance: parse_var(
                    "ANTICIPATION_AVAILABLE_BALANCE",
                    var("ANTICIPATION_AVAILABLE_BALANCE"),
                    parse_balance,
                )?
                .unwrap_or(defaults.available_balance),
            },
        })
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景，不读取环境变量
    pub fn with_overrides(environment: impl Into<String>, anticipation: AnticipationConfig) -> Self {
        Self {
            environment: environment.into(),
            anticipation,
            ..Self::default()
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
            anticipation: AnticipationConfig::default(),
        }
    }
}

/// 解析已设置的变量，失败时报告变量名
fn parse_var<T>(
    name: &str,
    raw: Option<String>,
    parse: impl FnOnce(&str) -> Option<T>,
) -> AppResult<Option<T>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    match parse(&raw) {
        Some(value) => Ok(Some(value)),
        None => Err(
            AppError::config(format!("Valor inválido para {}: {}", name, raw.trim()))
                .with_detail("variable", name),
        ),
    }
}

/// 解析费率上限策略 (不区分大小写)
pub fn parse_fee_rate_cap(value: &str) -> Option<FeeRateCap> {
    match value.trim().to_ascii_lowercase().as_str() {
        "unbounded" => Some(FeeRateCap::Unbounded),
        "clamp" => Some(FeeRateCap::Clamp),
        _ => None,
    }
}

/// 余额使用 `.` 作小数点，且不能为负
fn parse_balance(value: &str) -> Option<Decimal> {
    Decimal::from_str(value.trim())
        .ok()
        .filter(|d| !d.is_sign_negative())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;
    use std::collections::HashMap;

    #[test]
    fn test_anticipation_defaults() {
        let config = AnticipationConfig::default();
        assert_eq!(config.default_horizon_days, 30);
        assert_eq!(config.fee_rate_cap, FeeRateCap::Unbounded);
        assert_eq!(config.available_balance, Decimal::new(2314500, 2));
    }

    #[test]
    fn test_parse_fee_rate_cap() {
        assert_eq!(parse_fee_rate_cap("clamp"), Some(FeeRateCap::Clamp));
        assert_eq!(parse_fee_rate_cap(" Unbounded "), Some(FeeRateCap::Unbounded));
        assert_eq!(parse_fee_rate_cap("limit"), None);
    }

    #[test]
    fn test_parse_balance() {
        assert_eq!(parse_balance("5000.50"), Some(Decimal::new(500050, 2)));
        assert_eq!(parse_balance("-1"), None);
        assert_eq!(parse_balance("5.000,50"), None);
    }

    #[test]
    fn test_with_overrides() {
        let anticipation = AnticipationConfig {
            default_horizon_days: 15,
            fee_rate_cap: FeeRateCap::Clamp,
            available_balance: Decimal::from(100),
        };
        let config = Config::with_overrides("production", anticipation.clone());
        assert!(config.is_production());
        assert!(!config.is_development());
        assert_eq!(config.anticipation, anticipation);
    }

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert!(config.is_development());
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_dir, None);
        assert_eq!(config.anticipation, AnticipationConfig::default());
    }

    #[test]
    fn test_from_lookup_reads_values() {
        let config = Config::from_lookup(lookup(&[
            ("ENVIRONMENT", "production"),
            ("LOG_DIR", "/var/log/billing"),
            ("ANTICIPATION_DEFAULT_HORIZON_DAYS", "45"),
            ("ANTICIPATION_FEE_RATE_CAP", "clamp"),
            ("ANTICIPATION_AVAILABLE_BALANCE", "1000.00"),
            ("LOG_LEVEL", "  "),
        ]))
        .unwrap();
        assert!(config.is_production());
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_dir.as_deref(), Some("/var/log/billing"));
        assert_eq!(config.anticipation.default_horizon_days, 45);
        assert_eq!(config.anticipation.fee_rate_cap, FeeRateCap::Clamp);
        assert_eq!(config.anticipation.available_balance, Decimal::from(1000));
    }

    #[test]
    fn test_invalid_value_is_a_config_error() {
        let err = Config::from_lookup(lookup(&[("ANTICIPATION_FEE_RATE_CAP", "limit")]))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert_eq!(
            err.details.unwrap().get("variable").unwrap(),
            "ANTICIPATION_FEE_RATE_CAP"
        );

        let err = Config::from_lookup(lookup(&[("ANTICIPATION_DEFAULT_HORIZON_DAYS", "-3")]))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);

        let err = Config::from_lookup(lookup(&[("ANTICIPATION_AVAILABLE_BALANCE", "5.000,00")]))
            .unwrap_err();
        assert_eq!(err.message, "Valor inválido para ANTICIPATION_AVAILABLE_BALANCE: 5.000,00");
    }
}
