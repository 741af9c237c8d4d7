//! AI 难度等级

use serde::{Deserialize, Serialize};

/// AI 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// 简单：空格中均匀随机落子
    Easy,
    /// 中等：每手落子 50% 概率按困难规则, 否则随机
    Medium,
    /// 困难：固定优先级规则阶梯 (成三 > 堵截 > 中心 > 角 > 边)
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}
