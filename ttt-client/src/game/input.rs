//! 输入命令解析

use engine::{Difficulty, CELL_NAMES};

/// 一行输入解析出的命令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 在指定格位落子, 0-8 行主序
    Play(usize),
    /// 重开本局, 保留比分
    ResetRound,
    /// 全新对局, 比分清零
    NewGame,
    /// 切换为双人同屏
    ModePvp,
    /// 切换为人机对战
    ModePve,
    /// 调整 AI 难度
    Level(Difficulty),
    /// 查看本局落子历史
    History,
    /// 查看比分
    Score,
    /// 帮助
    Help,
    /// 退出
    Quit,
}

/// 解析一行输入
///
/// 数字 1-9 对应九宫格位, 1 为左上 9 为右下;
/// 也接受 a1-c3 形式的格位名。无法识别时返回 None
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim().to_ascii_lowercase();
    if line.is_empty() {
        return None;
    }

    // 纯数字: 按九宫格键位落子
    if let Ok(n) = line.parse::<usize>() {
        return if (1..=9).contains(&n) {
            Some(Command::Play(n - 1))
        } else {
            None
        };
    }

    // 格位名 a1-c3
    if let Some(index) = CELL_NAMES.iter().position(|&name| line == name) {
        return Some(Command::Play(index));
    }

    let mut parts = line.split_whitespace();
    match parts.next()? {
        "reset" | "r" => Some(Command::ResetRound),
        "new" | "n" => Some(Command::NewGame),
        "mode" | "m" => match parts.next()? {
            "pvp" | "2p" => Some(Command::ModePvp),
            "pve" | "ai" => Some(Command::ModePve),
            _ => None,
        },
        "level" | "l" => match parts.next()? {
            "easy" | "e" => Some(Command::Level(Difficulty::Easy)),
            "medium" | "m" => Some(Command::Level(Difficulty::Medium)),
            "hard" | "h" => Some(Command::Level(Difficulty::Hard)),
            _ => None,
        },
        "history" => Some(Command::History),
        "score" | "s" => Some(Command::Score),
        "help" | "h" | "?" => Some(Command::Help),
        "quit" | "q" | "exit" => Some(Command::Quit),
        _ => None,
    }
}
