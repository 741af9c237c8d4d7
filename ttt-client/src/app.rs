//! 应用主循环
//!
//! 渲染 → 读取一行命令 → 分发; 人机模式下在人类落子后调度电脑回合,
//! 等够演出延迟再凭代数校验执行, 过期的回合直接丢弃

use std::io::Write;

use anyhow::Result;
use engine::Difficulty;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};
use ttt_ai::MoveSelector;

use crate::game::{parse_command, run_ai_turn, Command, GameMode, GameSession};
use crate::render;
use crate::settings::GameSettings;

/// 终端应用
pub struct App {
    settings: GameSettings,
    session: GameSession,
    selector: MoveSelector,
    /// 最近一次选定的难度, 从双人模式切回人机时沿用
    difficulty: Difficulty,
}

impl App {
    /// 按设置初始化模式与难度
    pub fn new(settings: GameSettings) -> Self {
        let difficulty = settings.default_difficulty;
        let mode = if settings.default_vs_ai {
            GameMode::PvE { difficulty }
        } else {
            GameMode::PvP
        };
        Self {
            session: GameSession::new(mode),
            selector: MoveSelector::new(),
            difficulty,
            settings,
        }
    }

    /// 运行主循环, 读到 quit 或 EOF 退出
    pub async fn run(mut self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        println!("{}", render::render_welcome());
        self.draw();

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            let Some(command) = parse_command(&line) else {
                if !line.trim().is_empty() {
                    println!("无法识别的输入, 输入 help 查看命令");
                }
                continue;
            };

            match command {
                Command::Play(index) => self.play(index).await,
                Command::ResetRound => {
                    self.session.reset_round();
                    info!("重开本局");
                    self.draw();
                }
                Command::NewGame => {
                    self.session.new_game();
                    info!("全新对局，比分清零");
                    self.draw();
                }
                Command::ModePvp => self.set_mode(false),
                Command::ModePve => {
                    self.set_mode(true);
                    // 切过来时正赶上电脑的回合就直接走一手
                    self.ai_turn_if_due().await;
                }
                Command::Level(difficulty) => self.set_level(difficulty),
                Command::History => println!("{}", render::render_history(&self.session)),
                Command::Score => println!("{}", render::render_scores(&self.session)),
                Command::Help => println!("{}", render::render_help()),
                Command::Quit => break,
            }
        }

        println!("{}", render::render_session_summary(&self.session));
        // 退出时把会话中改过的模式和难度写回设置文件
        if let Err(e) = self.settings.save() {
            warn!("保存设置失败: {}", e);
        }
        info!("客户端退出");
        Ok(())
    }

    /// 切换模式, 同步记入设置并重绘
    fn set_mode(&mut self, vs_ai: bool) {
        let mode = if vs_ai {
            GameMode::PvE {
                difficulty: self.difficulty,
            }
        } else {
            GameMode::PvP
        };
        self.session.set_mode(mode);
        self.settings.default_vs_ai = vs_ai;
        println!("已切换: {}", render::mode_name(mode));
        self.draw();
    }

    /// 调整难度, 同步记入设置并重绘
    ///
    /// 双人模式下也记住难度, 下次切回人机时沿用
    fn set_level(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.settings.default_difficulty = difficulty;
        if self.session.mode().is_pve() {
            self.session.set_mode(GameMode::PvE { difficulty });
        }
        println!("难度: {}", render::difficulty_name(difficulty));
        self.draw();
    }

    /// 人类落子, 成功后视情况触发电脑回合
    async fn play(&mut self, index: usize) {
        match self.session.human_move(index) {
            Ok(outcome) => {
                info!("玩家落子: {}", outcome.mv);
                self.draw();
                self.ai_turn_if_due().await;
            }
            Err(e) => {
                // 点到已占格位、终局后的残留点击等, 只提示不改状态
                debug!("落子被拒绝: {}", e);
                println!("该手无效: {}", e);
            }
        }
    }

    /// 轮到电脑时调度并执行一手
    async fn ai_turn_if_due(&mut self) {
        let Some(pending) = self.session.schedule_ai_turn() else {
            return;
        };

        // 演出延迟, 让玩家先看清自己的落子
        tokio::time::sleep(self.settings.ai_move_delay()).await;

        if run_ai_turn(&mut self.session, &mut self.selector, pending).is_some() {
            self.draw();
        }
    }

    /// 输出当前棋盘和状态
    fn draw(&self) {
        let snapshot = self.session.snapshot();
        let winning_line = self.session.last_outcome().and_then(|o| o.winning_line);
        println!();
        println!(
            "{}",
            render::render_board(&snapshot, winning_line, self.settings.colored_output)
        );
        println!("{}", render::render_status(&self.session));
        if self.session.status().is_over() {
            println!("{}", render::render_scores(&self.session));
        }
    }
}
