//! 井字棋 AI 引擎
//!
//! 包含:
//! - 三档难度的选子策略
//! - 固定优先级规则阶梯 (成三 > 堵截 > 中心 > 角 > 边)
//! - 可注入种子的随机源, 便于复现选子过程

mod selector;

pub use selector::{Difficulty, MoveSelector};
