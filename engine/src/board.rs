//! 棋盘与游戏状态机
//!
//! 包含:
//! - Board: 3x3 棋盘存储
//! - GameStatus: 对局状态 (进行中 / 获胜 / 平局)
//! - GameState: 完整状态机, 唯一的落子入口
//! - Snapshot: 提供给选子器和渲染层的只读快照

use serde::{Deserialize, Serialize};

use crate::constants::CELL_COUNT;
use crate::error::{GameError, Result};
use crate::moves::{Move, MoveOutcome};
use crate::player::Player;
use crate::rules::Rules;

/// 3x3 棋盘
///
/// 格位按行主序排列, 索引为 `row * 3 + col`, None 表示空格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Player>; CELL_COUNT],
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// 从格位数组构造棋盘
    pub fn from_cells(cells: [Option<Player>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// 获取指定格位的棋子
    pub fn get(&self, index: usize) -> Option<Player> {
        if index < CELL_COUNT {
            self.cells[index]
        } else {
            None
        }
    }

    /// 设置指定格位的棋子
    pub fn set(&mut self, index: usize, cell: Option<Player>) {
        if index < CELL_COUNT {
            self.cells[index] = cell;
        }
    }

    /// 检查格位是否为空
    pub fn is_cell_empty(&self, index: usize) -> bool {
        index < CELL_COUNT && self.cells[index].is_none()
    }

    /// 所有空格位的索引, 升序
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| index)
            .collect()
    }

    /// 统计指定玩家的落子数
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&c| c == Some(player)).count()
    }

    /// 棋盘是否已占满
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// 全部格位, 只读
    pub fn cells(&self) -> &[Option<Player>; CELL_COUNT] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

/// 对局状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// 对局进行中
    InProgress,
    /// 一方连成三子获胜
    Won(Player),
    /// 棋盘占满且无人获胜
    Draw,
}

impl GameStatus {
    /// 对局是否已结束
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// 获胜方, 平局或进行中为 None
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }
}

/// 完整的游戏状态机
///
/// 棋盘内容、当前回合方和对局状态只通过 apply_move 和 reset 变化,
/// 保证回合交替与状态推导始终一致
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// 棋盘
    board: Board,
    /// 当前回合方
    current_turn: Player,
    /// 对局状态, 每次落子后重新推导, 缓存用于拦截终局后的输入
    status: GameStatus,
}

impl GameState {
    /// 创建初始状态: 空棋盘, X 先手
    pub fn new() -> Self {
        Self {
            board: Board::empty(),
            current_turn: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// 从棋盘和回合方构造, 对局状态由棋盘推导 (局面串解析用)
    pub fn from_board(board: Board, current_turn: Player) -> Self {
        let status = Rules::derive_status(&board);
        Self {
            board,
            current_turn,
            status,
        }
    }

    /// 重置为初始状态, 对局进行中或已结束均可调用
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// 棋盘, 只读
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 当前回合方
    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    /// 对局状态
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// 落子
    ///
    /// 前置条件: 索引在棋盘内、对局进行中、轮到该方、目标格为空,
    /// 任一条件不满足时返回错误且不改动任何状态。
    /// 成功后先判胜再判平, 占满最后一格同时连线按获胜处理;
    /// 仅在对局继续时交换回合方, 终局时保持获胜方为当前回合方
    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<MoveOutcome> {
        if index >= CELL_COUNT {
            return Err(GameError::OutOfRange { index });
        }
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        if player != self.current_turn {
            return Err(GameError::NotYourTurn { player });
        }
        if self.board.get(index).is_some() {
            return Err(GameError::CellOccupied { index });
        }

        self.board.set(index, Some(player));

        let winning_line = Rules::winning_line(&self.board);
        self.status = if winning_line.is_some() {
            GameStatus::Won(player)
        } else if self.board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(MoveOutcome {
            mv: Move::new(index, player),
            status: self.status,
            winning_line,
        })
    }

    /// 交换回合方
    fn switch_turn(&mut self) {
        self.current_turn = self.current_turn.opponent();
    }

    /// 生成只读快照
    ///
    /// 快照是值拷贝, 与状态机内部存储不共享引用
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: *self.board.cells(),
            current_turn: self.current_turn,
            status: self.status,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// 只读快照
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// 9 个格位, 行主序
    pub cells: [Option<Player>; CELL_COUNT],
    /// 当前回合方
    pub current_turn: Player,
    /// 对局状态
    pub status: GameStatus,
}

impl Snapshot {
    /// 所有空格位的索引, 升序
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| index)
            .collect()
    }

    /// 指定格位是否为空
    pub fn is_cell_empty(&self, index: usize) -> bool {
        index < CELL_COUNT && self.cells[index].is_none()
    }
}
