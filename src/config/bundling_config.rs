// ==========================================
// 采购需求合并建议器 - 合并规则配置
// ==========================================
// 金额阈值不做币种换算；调用方保证同一批次金额单位一致
// 默认值即历史口径（10 / 20）
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 指定配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "PROCUREMENT_BUNDLING_CONFIG";

// ==========================================
// BundlingConfig - 合并规则参数
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BundlingConfig {
    /// 最小成包数量（单条需求不成包）
    pub min_bundle_size: usize,

    /// 交付时间窗口（天），以子组首条交付日期为锚点
    pub time_window_days: i64,

    /// 中档金额阈值（严格大于时 +3）
    pub mid_value_threshold: f64,

    /// 高档金额阈值（严格大于时 +5）
    pub high_value_threshold: f64,

    /// 效率评分上限
    pub max_efficiency: u32,
}

impl Default for BundlingConfig {
    fn default() -> Self {
        Self {
            min_bundle_size: 2,
            time_window_days: 60,
            mid_value_threshold: 10.0,
            high_value_threshold: 20.0,
            max_efficiency: 25,
        }
    }
}

impl BundlingConfig {
    /// 从 JSON 文件加载（缺省字段取默认值），并做校验
    pub fn from_json_file(path: &Path) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config: BundlingConfig = serde_json::from_str(&raw).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// 参数校验
    pub fn validate(&self) -> ConfigResult<()> {
        if self.min_bundle_size < 2 {
            return Err(invalid(
                config_keys::MIN_BUNDLE_SIZE,
                format!("必须 >= 2，实际 {}", self.min_bundle_size),
            ));
        }

        if self.time_window_days < 0 {
            return Err(invalid(
                config_keys::TIME_WINDOW_DAYS,
                format!("不能为负数，实际 {}", self.time_window_days),
            ));
        }

        for (key, v) in [
            (config_keys::MID_VALUE_THRESHOLD, self.mid_value_threshold),
            (config_keys::HIGH_VALUE_THRESHOLD, self.high_value_threshold),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(invalid(key, format!("必须为非负有限数，实际 {}", v)));
            }
        }

        if self.mid_value_threshold > self.high_value_threshold {
            return Err(invalid(
                config_keys::MID_VALUE_THRESHOLD,
                format!(
                    "不能大于 {} ({} > {})",
                    config_keys::HIGH_VALUE_THRESHOLD,
                    self.mid_value_threshold,
                    self.high_value_threshold
                ),
            ));
        }

        if self.max_efficiency == 0 {
            return Err(invalid(config_keys::MAX_EFFICIENCY, "必须 > 0".to_string()));
        }

        Ok(())
    }
}

fn invalid(key: &str, message: String) -> ConfigError {
    ConfigError::Invalid {
        key: key.to_string(),
        message,
    }
}

/// 加载配置
///
/// 优先级：显式路径 > 环境变量 `PROCUREMENT_BUNDLING_CONFIG` > 默认值
pub fn load_config(path: Option<&Path>) -> ConfigResult<BundlingConfig> {
    if let Some(p) = path {
        tracing::info!(path = %p.display(), "加载合并规则配置");
        return BundlingConfig::from_json_file(p);
    }

    match std::env::var(CONFIG_PATH_ENV) {
        Ok(v) if !v.trim().is_empty() => {
            let p = Path::new(v.trim());
            tracing::info!(path = %p.display(), "从环境变量加载合并规则配置");
            BundlingConfig::from_json_file(p)
        }
        _ => {
            tracing::debug!("未指定配置文件，使用默认合并规则");
            Ok(BundlingConfig::default())
        }
    }
}

// ==========================================
// 配置键
// ==========================================
pub mod config_keys {
    pub const MIN_BUNDLE_SIZE: &str = "min_bundle_size";
    pub const TIME_WINDOW_DAYS: &str = "time_window_days";
    pub const MID_VALUE_THRESHOLD: &str = "mid_value_threshold";
    pub const HIGH_VALUE_THRESHOLD: &str = "high_value_threshold";
    pub const MAX_EFFICIENCY: &str = "max_efficiency";
}
