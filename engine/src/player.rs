//! 玩家定义

use serde::{Deserialize, Serialize};

/// 执子方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// X 方 (先手)
    X,
    /// O 方 (后手, 人机模式下由电脑执)
    O,
}

impl Player {
    /// 获取对方
    pub fn opponent(&self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// 获取棋子符号
    pub fn mark(&self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    /// 从符号解析, 大小写均可
    pub fn from_mark(c: char) -> Option<Player> {
        match c {
            'X' | 'x' => Some(Player::X),
            'O' | 'o' => Some(Player::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mark())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
        assert_eq!(Player::X.opponent().opponent(), Player::X);
    }

    #[test]
    fn test_mark_roundtrip() {
        assert_eq!(Player::from_mark(Player::X.mark()), Some(Player::X));
        assert_eq!(Player::from_mark(Player::O.mark()), Some(Player::O));
        assert_eq!(Player::from_mark('x'), Some(Player::X));
        assert_eq!(Player::from_mark('o'), Some(Player::O));
        assert_eq!(Player::from_mark('.'), None);
        assert_eq!(Player::from_mark('檫'), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Player::X.to_string(), "X");
        assert_eq!(Player::O.to_string(), "O");
    }
}
