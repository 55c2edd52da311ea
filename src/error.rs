//! 错误类型
//!
//! 计数器内部的错误都在本地恢复，只有配置加载错误会传到 main

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// 计数器状态更新失败的原因（调用方永远看不到，只写日志）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CounterError {
    #[error("invalid value {raw:?} for attribute `{attribute}`")]
    InvalidConfigurationValue { attribute: &'static str, raw: String },

    #[error("step {delta:+} from {value} leaves [{min}, {max}]")]
    OutOfRangeTransition {
        value: i64,
        delta: i64,
        min: i64,
        max: i64,
    },

    #[error("unknown attribute `{0}`")]
    UnknownAttribute(String),
}

/// 庆祝动画加载或激活失败
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CelebrationError {
    #[error("confetti needs at least one glyph")]
    EmptyGlyphs,

    #[error("confetti needs at least one frame")]
    ZeroFrames,

    #[error("celebration unavailable: {0}")]
    Unavailable(String),
}

/// 配置文件错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
