//! 电脑回合执行
//!
//! 演出延迟由应用层负责等待, 这里只做延迟结束后的校验、
//! 选子与落子; 过期的回合整手丢弃

use engine::MoveOutcome;
use ttt_ai::MoveSelector;

use super::{GameSession, PendingAiTurn};

/// 执行一手延迟后的电脑回合
///
/// 返回 None 表示这手被丢弃: 对局在延迟期间被重开、
/// 模式被切走, 或选子器无子可落
pub fn run_ai_turn(
    session: &mut GameSession,
    selector: &mut MoveSelector,
    pending: PendingAiTurn,
) -> Option<MoveOutcome> {
    // 延迟期间局面可能已经变掉, 先校验凭据再落子
    if !session.is_pending_current(pending) {
        tracing::debug!("电脑回合已过期，丢弃: {:?}", pending);
        return None;
    }

    let snapshot = session.snapshot();
    let Some(index) = selector.select_move(&snapshot, pending.difficulty) else {
        tracing::warn!("棋盘无空格，选子器未给出落子");
        return None;
    };

    match session.ai_move(index) {
        Ok(outcome) => {
            tracing::info!("电脑落子: {}, 对局状态: {:?}", outcome.mv, outcome.status);
            Some(outcome)
        }
        Err(e) => {
            // 选子器只会挑空格位, 走到这里说明会话和快照脱节了
            tracing::error!("电脑落子被拒绝: {}", e);
            None
        }
    }
}
