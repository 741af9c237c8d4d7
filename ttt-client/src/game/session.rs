//! 客户端对局会话
//!
//! 独占持有唯一的 GameState 实例, 人类与电脑的落子都经由会话转发;
//! 会话还维护跨局的计分板和用于失效过期电脑回合的对局代数

use chrono::{DateTime, Utc};
use engine::{Difficulty, GameState, GameStatus, Move, MoveOutcome, Player, Result, Snapshot};

/// 游戏模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// 双人同屏对战
    PvP,
    /// 人机对战, 玩家执 X, 电脑执 O
    PvE { difficulty: Difficulty },
}

impl GameMode {
    /// 是否是人机模式
    pub fn is_pve(&self) -> bool {
        matches!(self, GameMode::PvE { .. })
    }

    /// 获取难度 (仅人机模式有效)
    pub fn difficulty(&self) -> Option<Difficulty> {
        match self {
            GameMode::PvE { difficulty } => Some(*difficulty),
            GameMode::PvP => None,
        }
    }
}

/// 计分板, 只在本次会话内累计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scoreboard {
    /// X 方胜局数
    pub x_wins: u32,
    /// O 方胜局数
    pub o_wins: u32,
    /// 平局数
    pub draws: u32,
}

impl Scoreboard {
    /// 指定玩家的胜局数
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// 已结束的对局总数
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// 待执行的电脑回合
///
/// 调度时记下对局代数和难度, 演出延迟结束后凭代数校验
/// 局面是否还是当初那一局
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAiTurn {
    /// 调度时的对局代数
    pub generation: u64,
    /// 调度时生效的难度
    pub difficulty: Difficulty,
}

/// 客户端对局会话
#[derive(Debug)]
pub struct GameSession {
    /// 游戏状态机
    state: GameState,
    /// 游戏模式
    mode: GameMode,
    /// 计分板
    scores: Scoreboard,
    /// 本局的落子历史
    history: Vec<Move>,
    /// 最近一次落子结果, 渲染获胜线用
    last_outcome: Option<MoveOutcome>,
    /// 对局代数, 每次重开 +1, 用于失效还在延迟中的电脑回合
    generation: u64,
    /// 会话开始时间
    started_at: DateTime<Utc>,
}

impl GameSession {
    /// 创建会话, 空棋盘 X 先手
    pub fn new(mode: GameMode) -> Self {
        Self {
            state: GameState::new(),
            mode,
            scores: Scoreboard::default(),
            history: Vec::new(),
            last_outcome: None,
            generation: 0,
            started_at: Utc::now(),
        }
    }

    /// 当前快照
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// 游戏模式
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// 切换游戏模式, 对正在进行的对局立即生效
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
    }

    /// 计分板
    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    /// 本局的落子历史
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// 最近一次落子结果
    pub fn last_outcome(&self) -> Option<MoveOutcome> {
        self.last_outcome
    }

    /// 对局代数
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// 会话开始时间
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// 对局状态
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// 当前回合方
    pub fn current_turn(&self) -> Player {
        self.state.current_turn()
    }

    /// 本局总步数
    pub fn total_moves(&self) -> usize {
        self.history.len()
    }

    /// 人类落子
    ///
    /// 双人模式下两边都走这里; 人机模式下人类固定执 X,
    /// 轮到电脑时的点击会被引擎以 NotYourTurn 拒绝
    pub fn human_move(&mut self, index: usize) -> Result<MoveOutcome> {
        let player = match self.mode {
            GameMode::PvP => self.state.current_turn(),
            GameMode::PvE { .. } => Player::X,
        };
        self.apply(index, player)
    }

    /// 电脑落子
    pub fn ai_move(&mut self, index: usize) -> Result<MoveOutcome> {
        self.apply(index, Player::O)
    }

    fn apply(&mut self, index: usize, player: Player) -> Result<MoveOutcome> {
        let outcome = self.state.apply_move(index, player)?;
        self.history.push(outcome.mv);
        self.last_outcome = Some(outcome);
        if let Some(result) = outcome.status.winner() {
            match result {
                Player::X => self.scores.x_wins += 1,
                Player::O => self.scores.o_wins += 1,
            }
        } else if outcome.status == GameStatus::Draw {
            self.scores.draws += 1;
        }
        Ok(outcome)
    }

    /// 是否轮到电脑落子
    pub fn should_ai_move(&self) -> bool {
        self.mode.is_pve()
            && self.state.status() == GameStatus::InProgress
            && self.state.current_turn() == Player::O
    }

    /// 调度一手电脑回合
    ///
    /// 返回带当前代数与难度的凭据, 不轮到电脑时返回 None
    pub fn schedule_ai_turn(&self) -> Option<PendingAiTurn> {
        if !self.should_ai_move() {
            return None;
        }
        let difficulty = self.mode.difficulty()?;
        Some(PendingAiTurn {
            generation: self.generation,
            difficulty,
        })
    }

    /// 校验凭据是否仍然有效
    ///
    /// 延迟期间发生过重开 (代数不匹配) 或对局已不在等电脑落子时失效
    pub fn is_pending_current(&self, pending: PendingAiTurn) -> bool {
        pending.generation == self.generation && self.should_ai_move()
    }

    /// 重开本局, 保留比分
    pub fn reset_round(&mut self) {
        self.state.reset();
        self.history.clear();
        self.last_outcome = None;
        self.generation += 1;
    }

    /// 全新对局, 比分清零
    pub fn new_game(&mut self) {
        self.reset_round();
        self.scores = Scoreboard::default();
    }
}
