// ==========================================
// 采购需求合并建议器 - 配置层
// ==========================================
// 职责: 合并规则参数加载与校验
// 存储: JSON 文件（可选），缺省取默认值
// ==========================================

pub mod bundling_config;
pub mod error;

// 重导出核心配置
pub use bundling_config::{config_keys, load_config, BundlingConfig, CONFIG_PATH_ENV};
pub use error::{ConfigError, ConfigResult};
