//! 井字棋核心引擎库
//!
//! 包含:
//! - 玩家、棋盘、落子等核心数据结构
//! - 落子合法性校验与胜负判定规则
//! - 游戏状态机 (GameState) 与只读快照 (Snapshot)
//! - 局面串的解析与生成
//! - AI 难度等级定义

mod board;
mod constants;
mod difficulty;
mod error;
mod fen;
mod moves;
mod player;
mod rules;

pub use board::{Board, GameState, GameStatus, Snapshot};
pub use constants::*;
pub use difficulty::Difficulty;
pub use error::{GameError, Result};
pub use fen::{Fen, INITIAL_FEN};
pub use moves::{Move, MoveOutcome};
pub use player::Player;
pub use rules::Rules;
