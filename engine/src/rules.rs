//! 胜负判定规则

use crate::board::{Board, GameStatus};
use crate::constants::WIN_LINES;
use crate::player::Player;

/// 规则判定器
///
/// 所有判定都是对棋盘的纯函数, 不持有状态
pub struct Rules;

impl Rules {
    /// 返回第一条三格同色的胜利线
    ///
    /// 按 WIN_LINES 的固定顺序枚举: 横排、竖列、对角线
    pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
        WIN_LINES.into_iter().find(|line| {
            let first = board.get(line[0]);
            first.is_some() && first == board.get(line[1]) && first == board.get(line[2])
        })
    }

    /// 获胜方, 无人连线时为 None
    pub fn winner(board: &Board) -> Option<Player> {
        Self::winning_line(board).and_then(|line| board.get(line[0]))
    }

    /// 是否平局: 棋盘占满且无人连线
    pub fn is_draw(board: &Board) -> bool {
        board.is_full() && Self::winning_line(board).is_none()
    }

    /// 假设该方在 index 落子, 是否立即连成三子
    ///
    /// 目标格已被占用时恒为 false
    pub fn would_win(board: &Board, index: usize, player: Player) -> bool {
        if !board.is_cell_empty(index) {
            return false;
        }
        let mut trial = *board;
        trial.set(index, Some(player));
        Self::winner(&trial) == Some(player)
    }

    /// 从棋盘推导对局状态, 胜利优先于平局
    pub fn derive_status(board: &Board) -> GameStatus {
        if let Some(winner) = Self::winner(board) {
            GameStatus::Won(winner)
        } else if board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}
