//! 井字棋终端客户端
//!
//! 在核心引擎 (engine) 与选子引擎 (ttt-ai) 之上的展示层:
//! 渲染棋盘、解析命令、维护计分板, 并负责电脑回合的演出节奏

pub mod app;
pub mod game;
pub mod render;
pub mod settings;
