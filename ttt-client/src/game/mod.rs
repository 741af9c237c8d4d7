//! 游戏会话模块
//!
//! 管理对局会话、输入命令与电脑回合

mod ai;
mod input;
mod session;

pub use ai::*;
pub use input::*;
pub use session::*;
