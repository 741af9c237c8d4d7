//! 游戏设置模块
//!
//! 提供设置数据结构和 JSON 持久化

use std::path::{Path, PathBuf};
use std::time::Duration;

use engine::{Difficulty, AI_MOVE_DELAY_MS};
use serde::{Deserialize, Serialize};

/// 游戏设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    /// 默认 AI 难度
    pub default_difficulty: Difficulty,
    /// 启动时是否进入人机模式 (false 为双人同屏)
    pub default_vs_ai: bool,
    /// 电脑落子前的演出延迟 (毫秒)
    pub ai_move_delay_ms: u64,
    /// 彩色输出
    pub colored_output: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            default_difficulty: Difficulty::default(),
            default_vs_ai: true,
            ai_move_delay_ms: AI_MOVE_DELAY_MS,
            colored_output: true,
        }
    }
}

impl GameSettings {
    /// 获取设置文件路径
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("tic-tac-toe");
            path.push("settings.json");
            path
        })
    }

    /// 从文件加载设置
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            tracing::warn!("无法获取配置目录，使用默认设置");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// 从指定路径加载, 任何失败都退回默认设置
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::info!("设置文件不存在，使用默认设置");
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => {
                    tracing::info!("已加载设置: {:?}", path);
                    settings
                }
                Err(e) => {
                    tracing::warn!("设置文件格式无效: {}，使用默认设置", e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("无法读取设置文件: {}，使用默认设置", e);
                Self::default()
            }
        }
    }

    /// 保存设置到文件
    pub fn save(&self) -> Result<(), String> {
        let Some(path) = Self::settings_path() else {
            return Err("无法获取配置目录".to_string());
        };
        self.save_to(&path)
    }

    /// 保存到指定路径
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                return Err(format!("无法创建配置目录: {}", e));
            }
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| format!("序列化设置失败: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("写入设置文件失败: {}", e))?;

        tracing::info!("设置已保存: {:?}", path);
        Ok(())
    }

    /// 演出延迟对应的 Duration
    pub fn ai_move_delay(&self) -> Duration {
        Duration::from_millis(self.ai_move_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = GameSettings::default();
        assert_eq!(settings.default_difficulty, Difficulty::Medium);
        assert!(settings.default_vs_ai);
        assert_eq!(settings.ai_move_delay_ms, AI_MOVE_DELAY_MS);
        assert!(settings.colored_output);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("conf").join("settings.json");

        let settings = GameSettings {
            default_difficulty: Difficulty::Hard,
            default_vs_ai: false,
            ai_move_delay_ms: 250,
            colored_output: false,
        };
        settings.save_to(&path).unwrap();

        let loaded = GameSettings::load_from(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no-such-file.json");
        assert_eq!(GameSettings::load_from(&path), GameSettings::default());
    }

    #[test]
    fn test_load_invalid_json_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "{ not valid json").unwrap();
        assert_eq!(GameSettings::load_from(&path), GameSettings::default());
    }
}
