//! 游戏常量定义

use std::time::Duration;

/// 棋盘边长
pub const BOARD_SIZE: usize = 3;

/// 格位总数
pub const CELL_COUNT: usize = 9;

/// 全部胜利线, 索引按行主序 0-8
///
/// 枚举顺序固定: 先 3 条横排, 再 3 条竖列, 最后 2 条对角线,
/// 判定时按此顺序取第一条满足的线
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// 中心格
pub const CENTER_CELL: usize = 4;

/// 四个角
pub const CORNER_CELLS: [usize; 4] = [0, 2, 6, 8];

/// 四条边的中点
pub const EDGE_CELLS: [usize; 4] = [1, 3, 5, 7];

/// 格位名称, 列 a-c 从左到右, 行 1-3 从上到下
pub const CELL_NAMES: [&str; 9] = [
    "a1", "b1", "c1",
    "a2", "b2", "c2",
    "a3", "b3", "c3",
];

/// 电脑落子前的演出延迟毫秒数, 让玩家先看清自己的落子
pub const AI_MOVE_DELAY_MS: u64 = 500;

/// 演出延迟对应的 Duration
pub const AI_MOVE_DELAY: Duration = Duration::from_millis(AI_MOVE_DELAY_MS);
