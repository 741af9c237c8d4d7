//! 选子引擎
//!
//! 按难度在两种策略间切换:
//! - 随机策略: 空格中均匀随机
//! - 规则阶梯: 成三 > 堵截 > 中心 > 角 > 边, 自上而下取第一条适用规则
//!
//! 中等难度每手落子掷一次骰子, 50% 概率走规则阶梯, 否则随机

use engine::{Board, Rules, Snapshot, CENTER_CELL, CORNER_CELLS, EDGE_CELLS};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// 重导出 Difficulty 以便外部使用
pub use engine::Difficulty;

/// 选子引擎
///
/// 随机源归引擎独占, 可注入固定种子复现整个选子序列
pub struct MoveSelector {
    rng: ChaCha8Rng,
}

impl MoveSelector {
    /// 创建新的选子引擎, 随机种子
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// 使用固定种子创建, 测试与复盘用
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// 为快照中的当前回合方选择一个空格位
    ///
    /// 难度在每次调用时生效, 调用之间不保留策略状态;
    /// 棋盘无空格时返回 None, 正常对局流程不会走到这一步
    pub fn select_move(&mut self, snapshot: &Snapshot, difficulty: Difficulty) -> Option<usize> {
        let empty = snapshot.empty_cells();
        if empty.is_empty() {
            return None;
        }

        let chosen = match difficulty {
            Difficulty::Easy => self.random_move(&empty),
            Difficulty::Medium => {
                // 每手只掷一次骰子, 整手落子完全按掷出的策略执行
                if self.rng.gen::<f32>() < 0.5 {
                    self.ladder_move(snapshot, &empty)
                } else {
                    self.random_move(&empty)
                }
            }
            Difficulty::Hard => self.ladder_move(snapshot, &empty),
        };

        if let Some((index, rule)) = chosen {
            tracing::debug!(
                "选子: 难度 {:?}, 规则 {}, 格位 {}",
                difficulty,
                rule,
                index
            );
        }
        chosen.map(|(index, _)| index)
    }

    /// 空格中均匀随机
    fn random_move(&mut self, empty: &[usize]) -> Option<(usize, &'static str)> {
        empty.choose(&mut self.rng).map(|&index| (index, "random"))
    }

    /// 规则阶梯
    ///
    /// 成三和堵截按索引升序扫描, 命中多个时取最小索引;
    /// 角和边在各自的空位中随机挑选
    fn ladder_move(
        &mut self,
        snapshot: &Snapshot,
        empty: &[usize],
    ) -> Option<(usize, &'static str)> {
        let board = Board::from_cells(snapshot.cells);
        let me = snapshot.current_turn;
        let opponent = me.opponent();

        // 1. 能直接成三就成三
        if let Some(&index) = empty.iter().find(|&&i| Rules::would_win(&board, i, me)) {
            return Some((index, "win"));
        }

        // 2. 对方下一手能成三就堵截
        if let Some(&index) = empty
            .iter()
            .find(|&&i| Rules::would_win(&board, i, opponent))
        {
            return Some((index, "block"));
        }

        // 3. 抢中心
        if board.is_cell_empty(CENTER_CELL) {
            return Some((CENTER_CELL, "center"));
        }

        // 4. 随机占一个空角
        let corners: Vec<usize> = CORNER_CELLS
            .iter()
            .copied()
            .filter(|&i| board.is_cell_empty(i))
            .collect();
        if let Some(&index) = corners.choose(&mut self.rng) {
            return Some((index, "corner"));
        }

        // 5. 随机占一条空边
        let edges: Vec<usize> = EDGE_CELLS
            .iter()
            .copied()
            .filter(|&i| board.is_cell_empty(i))
            .collect();
        if let Some(&index) = edges.choose(&mut self.rng) {
            return Some((index, "edge"));
        }

        None
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{Fen, GameStatus, Player, CELL_COUNT};

    fn snapshot_of(fen: &str) -> Snapshot {
        Fen::parse(fen).unwrap().snapshot()
    }

    #[test]
    fn test_full_board_returns_none_for_all_difficulties() {
        let snapshot = snapshot_of("XOX/XXO/OXO x");
        let mut selector = MoveSelector::seeded(1);

        assert_eq!(selector.select_move(&snapshot, Difficulty::Easy), None);
        assert_eq!(selector.select_move(&snapshot, Difficulty::Medium), None);
        assert_eq!(selector.select_move(&snapshot, Difficulty::Hard), None);
    }

    #[test]
    fn test_hard_takes_winning_move_over_block() {
        // O 在 2 落子即胜; 同时 X 威胁在 4 成中列, 成三优先于堵截
        let snapshot = snapshot_of("OO./X.X/.X. o");
        for seed in 0..20 {
            let mut selector = MoveSelector::seeded(seed);
            assert_eq!(selector.select_move(&snapshot, Difficulty::Hard), Some(2));
        }
    }

    #[test]
    fn test_hard_blocks_immediate_threat() {
        // X 下一手在 2 成首行, O 必须堵 2
        let snapshot = snapshot_of("XX./O../... o");
        for seed in 0..20 {
            let mut selector = MoveSelector::seeded(seed);
            assert_eq!(selector.select_move(&snapshot, Difficulty::Hard), Some(2));
        }
    }

    #[test]
    fn test_hard_plays_for_current_turn() {
        // 同一棋盘轮到 X 时, 选子器替 X 在 5 成三, 而不是替 O 落子
        let snapshot = snapshot_of("OO./XX./... x");
        let mut selector = MoveSelector::seeded(7);
        assert_eq!(selector.select_move(&snapshot, Difficulty::Hard), Some(5));
    }

    #[test]
    fn test_hard_multiple_wins_takes_lowest_index() {
        // O 在 1、6、8 都能成三, 按索引升序扫描取 1
        let snapshot = snapshot_of("O.O/.O./... o");
        for seed in 0..20 {
            let mut selector = MoveSelector::seeded(seed);
            assert_eq!(selector.select_move(&snapshot, Difficulty::Hard), Some(1));
        }
    }

    #[test]
    fn test_hard_takes_center_when_open() {
        let snapshot = snapshot_of(".X./.../... o");
        let mut selector = MoveSelector::seeded(3);
        assert_eq!(
            selector.select_move(&snapshot, Difficulty::Hard),
            Some(engine::CENTER_CELL)
        );

        // 空棋盘首手也抢中心
        let snapshot = snapshot_of(".../.../... x");
        assert_eq!(
            selector.select_move(&snapshot, Difficulty::Hard),
            Some(engine::CENTER_CELL)
        );
    }

    #[test]
    fn test_hard_prefers_corners_over_edges() {
        // 中心被占且无可成可堵, 只能在空角 2 和 6 中挑
        let snapshot = snapshot_of("X../.O./..X o");
        let mut seen = Vec::new();
        for seed in 0..50 {
            let mut selector = MoveSelector::seeded(seed);
            let index = selector.select_move(&snapshot, Difficulty::Hard).unwrap();
            assert!(
                index == 2 || index == 6,
                "expected corner, got {}",
                index
            );
            seen.push(index);
        }
        assert!(seen.contains(&2));
        assert!(seen.contains(&6));
    }

    #[test]
    fn test_hard_falls_back_to_edges() {
        // 构造局面: 角和中心全部占满, 双方都无可成可堵, 只剩四条边
        let mut cells = [None; CELL_COUNT];
        cells[0] = Some(Player::X);
        cells[2] = Some(Player::O);
        cells[4] = Some(Player::X);
        cells[6] = Some(Player::O);
        cells[8] = Some(Player::X);
        let snapshot = Snapshot {
            cells,
            current_turn: Player::O,
            status: GameStatus::InProgress,
        };

        for seed in 0..20 {
            let mut selector = MoveSelector::seeded(seed);
            let index = selector.select_move(&snapshot, Difficulty::Hard).unwrap();
            assert!([1, 3, 5, 7].contains(&index), "expected edge, got {}", index);
        }
    }

    #[test]
    fn test_easy_only_picks_empty_cells() {
        let snapshot = snapshot_of("X.O/.X./O.. o");
        let mut selector = MoveSelector::seeded(9);
        for _ in 0..200 {
            let index = selector.select_move(&snapshot, Difficulty::Easy).unwrap();
            assert!(snapshot.is_cell_empty(index));
        }
    }

    #[test]
    fn test_easy_is_roughly_uniform() {
        // 只剩 7 和 8 两个空格, 1000 次选择应接近各半
        let snapshot = snapshot_of("XOX/XXO/O.. o");
        let mut selector = MoveSelector::seeded(42);

        let mut count_7 = 0;
        for _ in 0..1000 {
            match selector.select_move(&snapshot, Difficulty::Easy) {
                Some(7) => count_7 += 1,
                Some(8) => {}
                other => panic!("unexpected selection: {:?}", other),
            }
        }
        assert!(
            (400..=600).contains(&count_7),
            "count_7 = {}",
            count_7
        );
    }

    #[test]
    fn test_easy_ignores_threats() {
        // X 威胁在 2 成首行, 简单难度不保证去堵: 6 个空格下
        // 1000 次选择不可能全部落在 2
        let snapshot = snapshot_of("XX./O../... o");
        let mut selector = MoveSelector::seeded(5);

        let mut others = 0;
        for _ in 0..1000 {
            if selector.select_move(&snapshot, Difficulty::Easy) != Some(2) {
                others += 1;
            }
        }
        assert!(others > 500, "others = {}", others);
    }

    #[test]
    fn test_medium_blends_ladder_and_random() {
        // 规则阶梯在该局面固定堵 2; 均匀随机落 2 的概率只有 1/6。
        // 混合后落 2 的频率应明显高于纯随机、低于纯阶梯
        let snapshot = snapshot_of("XX./O../... o");
        let mut selector = MoveSelector::seeded(11);

        let mut count_2 = 0;
        let trials = 600;
        for _ in 0..trials {
            if selector.select_move(&snapshot, Difficulty::Medium) == Some(2) {
                count_2 += 1;
            }
        }
        // 期望值约 0.583 * 600 = 350
        assert!(
            (250..=450).contains(&count_2),
            "count_2 = {}",
            count_2
        );
        assert!(count_2 < trials);
    }

    #[test]
    fn test_seeded_selector_is_reproducible() {
        let snapshot = snapshot_of("X.O/.X./O.. o");
        let mut a = MoveSelector::seeded(2024);
        let mut b = MoveSelector::seeded(2024);

        let picks_a: Vec<_> = (0..20)
            .map(|_| a.select_move(&snapshot, Difficulty::Easy))
            .collect();
        let picks_b: Vec<_> = (0..20)
            .map(|_| b.select_move(&snapshot, Difficulty::Easy))
            .collect();
        assert_eq!(picks_a, picks_b);
    }
}
