//! 落子与落子结果

use serde::{Deserialize, Serialize};

use crate::board::GameStatus;
use crate::constants::CELL_NAMES;
use crate::player::Player;

/// 一次落子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 格位索引, 0-8 行主序
    pub index: usize,
    /// 落子方
    pub player: Player,
}

impl Move {
    /// 创建落子
    pub fn new(index: usize, player: Player) -> Self {
        Self { index, player }
    }

    /// 格位名称, 如 "b2"
    pub fn cell_name(&self) -> &'static str {
        CELL_NAMES.get(self.index).copied().unwrap_or("??")
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.cell_name())
    }
}

/// 落子结果, 引擎向界面层返回的状态增量
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// 本次落子
    pub mv: Move,
    /// 落子后的对局状态
    pub status: GameStatus,
    /// 获胜线, 仅当 status 为 Won 时存在
    pub winning_line: Option<[usize; 3]>,
}
