use clap::Parser;
use game_shelf_lib::cli::{self, Cli};
use game_shelf_lib::utils::logs::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    // 只有加载游戏目录需要异步运行时
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let mut stdout = std::io::stdout().lock();
    runtime.block_on(cli::run(cli, &mut stdout))
}
