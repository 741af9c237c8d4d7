//! 局面串的解析与生成
//!
//! 格式: `<棋盘> <回合方>`
//!
//! 棋盘为三行、每行三个字符, 行间用 `/` 分隔;
//! `X` / `O` 表示棋子, `.` 表示空格, 回合方为 `x` 或 `o`。
//!
//! 示例: `XX./O../... o` 表示 X 占据首行前两格、O 占据 3 号格, 轮到 O 落子

use crate::board::{Board, GameState};
use crate::constants::BOARD_SIZE;
use crate::error::{GameError, Result};
use crate::player::Player;

/// 初始局面串
pub const INITIAL_FEN: &str = ".../.../... x";

/// 局面串处理
pub struct Fen;

impl Fen {
    /// 解析局面串为游戏状态
    ///
    /// 回合方缺省为 x, 对局状态由棋盘推导;
    /// 只校验形状, 不校验双方子数是否符合交替落子
    pub fn parse(fen: &str) -> Result<GameState> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.is_empty() {
            return Err(GameError::InvalidFen {
                reason: "empty string".to_string(),
            });
        }

        let board = Self::parse_board(parts[0])?;

        let current_turn = match parts.get(1) {
            Some(turn) => {
                let c = turn.chars().next().unwrap_or(' ');
                Player::from_mark(c).ok_or_else(|| GameError::InvalidFen {
                    reason: format!("invalid turn marker: {}", turn),
                })?
            }
            None => Player::X,
        };

        Ok(GameState::from_board(board, current_turn))
    }

    /// 解析棋盘部分
    fn parse_board(board_str: &str) -> Result<Board> {
        let rows: Vec<&str> = board_str.split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(GameError::InvalidFen {
                reason: format!("expected {} rows, got {}", BOARD_SIZE, rows.len()),
            });
        }

        let mut board = Board::empty();
        for (row, row_str) in rows.iter().enumerate() {
            if row_str.chars().count() != BOARD_SIZE {
                return Err(GameError::InvalidFen {
                    reason: format!("row {} must have {} cells", row + 1, BOARD_SIZE),
                });
            }
            for (col, c) in row_str.chars().enumerate() {
                if c == '.' {
                    continue;
                }
                let player = Player::from_mark(c).ok_or_else(|| GameError::InvalidFen {
                    reason: format!("invalid cell character: {}", c),
                })?;
                board.set(row * BOARD_SIZE + col, Some(player));
            }
        }

        Ok(board)
    }

    /// 从游戏状态生成局面串
    pub fn generate(state: &GameState) -> String {
        let mut result = String::with_capacity(13);
        for row in 0..BOARD_SIZE {
            if row > 0 {
                result.push('/');
            }
            for col in 0..BOARD_SIZE {
                match state.board().get(row * BOARD_SIZE + col) {
                    Some(player) => result.push(player.mark()),
                    None => result.push('.'),
                }
            }
        }
        result.push(' ');
        result.push(state.current_turn().mark().to_ascii_lowercase());
        result
    }
}
