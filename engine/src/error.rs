//! 错误类型定义

use thiserror::Error;

use crate::player::Player;

/// 游戏规则错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    /// 格位索引越界
    #[error("Cell index out of range: {index}")]
    OutOfRange { index: usize },

    /// 格位已被占用
    #[error("Cell {index} is already occupied")]
    CellOccupied { index: usize },

    /// 对局已结束, 不再接受落子
    #[error("Game is already over")]
    GameOver,

    /// 未轮到该方落子
    #[error("Not {player}'s turn")]
    NotYourTurn { player: Player },

    /// 无效的局面串
    #[error("Invalid position string: {reason}")]
    InvalidFen { reason: String },
}

/// 游戏操作结果类型
pub type Result<T> = std::result::Result<T, GameError>;
