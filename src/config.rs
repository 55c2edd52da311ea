use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// 配置文件结构
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 初始属性，值可以是任意 TOML 标量，统一转成字符串后再宽松解析
    pub attributes: BTreeMap<String, toml::Value>,
    pub celebration: CelebrationConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CelebrationConfig {
    pub enabled: bool,
    pub frames: u16,
    pub glyphs: String,
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            frames: 40,
            glyphs: "*+o.x".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl Config {
    /// 属性以 (名称, 字符串值) 的形式给出
    pub fn attribute_pairs(&self) -> Vec<(String, String)> {
        self.attributes
            .iter()
            .map(|(name, value)| {
                let raw = match value {
                    toml::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (name.clone(), raw)
            })
            .collect()
    }
}

/// 获取配置目录路径 (~/.config/tally/)
pub fn config_dir() -> io::Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("tally"))
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "无法获取用户配置目录"))
}

/// 从 TOML 文件加载配置，文件不存在时返回默认值
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("nope.toml")).unwrap();
        assert!(config.attributes.is_empty());
        assert!(config.celebration.enabled);
        assert_eq!(config.celebration.frames, 40);
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn test_load_attributes_and_celebration() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[attributes]
counter = 3
min = "-2"
max = 25.0
start = "oops"

[celebration]
frames = 12
"#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        let pairs = config.attribute_pairs();
        assert_eq!(
            pairs,
            vec![
                ("counter".to_string(), "3".to_string()),
                ("max".to_string(), "25.0".to_string()),
                ("min".to_string(), "-2".to_string()),
                ("start".to_string(), "oops".to_string()),
            ]
        );
        assert_eq!(config.celebration.frames, 12);
        assert_eq!(config.celebration.glyphs, "*+o.x");
    }

    #[test]
    fn test_malformed_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[attributes\ncounter = ").unwrap();
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }
}
