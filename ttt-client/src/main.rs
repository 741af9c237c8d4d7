use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ttt_client::app::App;
use ttt_client::settings::GameSettings;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志, 写到 stderr 避免和棋盘输出混在一起
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("ttt_client=info".parse()?))
        .init();

    info!("井字棋客户端启动中...");

    let settings = GameSettings::load();
    App::new(settings).run().await
}
