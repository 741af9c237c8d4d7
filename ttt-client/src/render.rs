//! 终端渲染
//!
//! 把快照、比分和落子历史排版成文本, 彩色输出可以整体关掉;
//! 获胜线上的棋子用 *X* 包裹, 无色模式下也能看出连线

use colored::Colorize;
use engine::{Difficulty, GameStatus, Player, Snapshot, BOARD_SIZE};

use crate::game::{GameMode, GameSession};

/// 难度显示名称
pub fn difficulty_name(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "简单",
        Difficulty::Medium => "中等",
        Difficulty::Hard => "困难",
    }
}

/// 模式显示名称
pub fn mode_name(mode: GameMode) -> String {
    match mode {
        GameMode::PvP => "双人同屏".to_string(),
        GameMode::PvE { difficulty } => format!("人机对战·{}", difficulty_name(difficulty)),
    }
}

/// 渲染棋盘
///
/// 空格位显示九宫格键位数字, 方便直接按数字落子
pub fn render_board(
    snapshot: &Snapshot,
    winning_line: Option<[usize; 3]>,
    use_color: bool,
) -> String {
    let on_line = |index: usize| winning_line.map_or(false, |line| line.contains(&index));

    let mut out = String::new();
    out.push_str("     a   b   c\n");
    out.push_str("   +---+---+---+\n");
    for row in 0..BOARD_SIZE {
        out.push_str(&format!(" {} ", row + 1));
        for col in 0..BOARD_SIZE {
            let index = row * BOARD_SIZE + col;
            out.push('|');
            out.push_str(&cell_text(
                snapshot.cells[index],
                index,
                on_line(index),
                use_color,
            ));
        }
        out.push_str("|\n");
        out.push_str("   +---+---+---+\n");
    }
    out
}

/// 渲染单个格位, 宽度固定 3 个可见字符
fn cell_text(cell: Option<Player>, index: usize, highlight: bool, use_color: bool) -> String {
    match cell {
        Some(player) => {
            let body = if highlight {
                format!("*{}*", player.mark())
            } else {
                format!(" {} ", player.mark())
            };
            if !use_color {
                return body;
            }
            let styled = if highlight {
                body.green().bold()
            } else {
                match player {
                    Player::X => body.red().bold(),
                    Player::O => body.blue().bold(),
                }
            };
            styled.to_string()
        }
        None => {
            let body = format!(" {} ", index + 1);
            if use_color {
                body.dimmed().to_string()
            } else {
                body
            }
        }
    }
}

/// 渲染回合提示或终局横幅
pub fn render_status(session: &GameSession) -> String {
    match session.status() {
        GameStatus::InProgress => {
            let turn = session.current_turn();
            if session.mode().is_pve() && turn == Player::O {
                "等待电脑落子...".to_string()
            } else {
                format!("轮到 {} 落子", turn)
            }
        }
        GameStatus::Won(player) => format!("{} 获胜! 输入 r 再来一局, n 重新计分", player),
        GameStatus::Draw => "平局! 输入 r 再来一局, n 重新计分".to_string(),
    }
}

/// 渲染比分行
pub fn render_scores(session: &GameSession) -> String {
    let scores = session.scores();
    format!(
        "比分: X {} - {} O, 平局 {} [{}]",
        scores.x_wins,
        scores.o_wins,
        scores.draws,
        mode_name(session.mode())
    )
}

/// 渲染本局落子历史
pub fn render_history(session: &GameSession) -> String {
    if session.history().is_empty() {
        return "本局还没有落子".to_string();
    }
    session
        .history()
        .iter()
        .enumerate()
        .map(|(i, mv)| format!("{:>2}. {}", i + 1, mv))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 渲染会话小结, 退出时打印
pub fn render_session_summary(session: &GameSession) -> String {
    let scores = session.scores();
    format!(
        "本次会话共 {} 局: X 胜 {}, O 胜 {}, 平局 {} (开始于 {})",
        scores.total(),
        scores.x_wins,
        scores.o_wins,
        scores.draws,
        session.started_at().format("%Y-%m-%d %H:%M:%S")
    )
}

/// 渲染欢迎语
pub fn render_welcome() -> String {
    "=== 井字棋 ===\n输入 1-9 或 a1-c3 落子, help 查看全部命令".to_string()
}

/// 渲染帮助
pub fn render_help() -> String {
    [
        "命令:",
        "  1-9 / a1-c3   在对应格位落子 (1 为左上, 9 为右下)",
        "  r, reset      重开本局, 保留比分",
        "  n, new        全新对局, 比分清零",
        "  m, mode       切换模式: mode pvp / mode ai",
        "  l, level      调整难度: level easy / medium / hard",
        "  history       查看本局落子历史",
        "  s, score      查看比分",
        "  h, help, ?    显示本帮助",
        "  q, quit       退出",
    ]
    .join("\n")
}
