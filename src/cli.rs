//! 命令行入口
//!
//! 命令层只负责解析参数、调用账本和输出结果，每次命令执行后重新读取账本展示最新状态。

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};

use crate::catalog::{Catalog, CatalogSource};
use crate::entity::prelude::*;
use crate::service::Shelf;
use crate::utils::logs::{LogLevel, get_shelf_log_level};

#[derive(Debug, Parser)]
#[command(
    name = "game-shelf",
    version,
    about = "Browse a game catalog, keep favourites and play history"
)]
pub struct Cli {
    /// 存储文件路径（默认使用数据目录下的 data/shelf_store.json）
    #[arg(long, global = true, env = "GAME_SHELF_STORE")]
    pub store: Option<PathBuf>,

    /// 不使用持久化存储（收藏与游玩记录不会保存）
    #[arg(long, global = true, conflicts_with = "store")]
    pub no_store: bool,

    /// 游戏目录来源：JSON 文件路径或 http(s) 地址
    #[arg(long, global = true, env = "GAMES_API_URL")]
    pub catalog: Option<String>,

    #[arg(long, global = true, env = "GAME_SHELF_LOG", value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 收藏管理
    #[command(subcommand)]
    Favourites(FavouritesCommand),
    /// 开始游玩（记录到最近游玩并输出游戏地址）
    Play { code: String },
    /// 最近游玩（最近的在前）
    Recent,
    /// 按名称或分类搜索
    Search { term: String },
    /// 列出某个主分类下的所有游戏
    Category { name: String },
    /// 列出所有主分类
    Categories,
    /// 用户设置
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Subcommand)]
pub enum FavouritesCommand {
    List,
    Add { code: String },
    Remove { code: String },
    Toggle { code: String },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    Show,
    SetCatalog { source: String },
    ClearCatalog,
}

/// 执行命令，结果写入 `out`
pub async fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let shelf = if cli.no_store {
        log::info!("未启用持久化存储，收藏与游玩记录不会保存");
        Shelf::detached()
    } else {
        Shelf::open(cli.store.as_deref()).map_err(|e| anyhow!("无法打开存储: {}", e))?
    };
    let catalog_flag = cli.catalog.as_deref();

    match cli.command {
        Command::Favourites(FavouritesCommand::List) => {
            let favourites = shelf
                .favourites
                .list_favourites()
                .context("读取收藏列表失败")?;
            if favourites.is_empty() {
                writeln!(out, "No favourites added")?;
            }
            for game in &favourites {
                writeln!(out, "{}", render_game(game, true))?;
            }
        }
        Command::Favourites(FavouritesCommand::Add { code }) => {
            let catalog = load_catalog(&shelf, catalog_flag).await?;
            let game = find_game(&catalog, &code)?;
            shelf.favourites.add_favourite(game).context("添加收藏失败")?;
            writeln!(out, "Added {} to favourites", game.display_name())?;
        }
        Command::Favourites(FavouritesCommand::Remove { code }) => {
            shelf
                .favourites
                .remove_favourite(&Game::with_code(&code))
                .context("移除收藏失败")?;
            writeln!(out, "Removed {} from favourites", code)?;
        }
        Command::Favourites(FavouritesCommand::Toggle { code }) => {
            let catalog = load_catalog(&shelf, catalog_flag).await?;
            let game = find_game(&catalog, &code)?;
            let now_favourite = shelf
                .favourites
                .toggle_favourite(game)
                .context("切换收藏状态失败")?;
            let verb = if now_favourite { "Added" } else { "Removed" };
            let preposition = if now_favourite { "to" } else { "from" };
            writeln!(out, "{} {} {} favourites", verb, game.display_name(), preposition)?;
        }
        Command::Play { code } => {
            let catalog = load_catalog(&shelf, catalog_flag).await?;
            let game = find_game(&catalog, &code)?;
            match shelf.play(game).context("记录游玩失败")? {
                Some(url) => writeln!(out, "{}", url)?,
                None => writeln!(out, "{} has no play url", game.display_name())?,
            }
        }
        Command::Recent => {
            let games = shelf.recently_played().context("读取最近游玩失败")?;
            for (game, favourite) in shelf.with_favourite_status(&games)? {
                writeln!(out, "{}", render_game(game, favourite))?;
            }
        }
        Command::Search { term } => {
            let catalog = load_catalog(&shelf, catalog_flag).await?;
            let results = catalog.search(&term);
            if results.is_empty() {
                writeln!(out, "No results")?;
            }
            let games = shelf.with_favourite_status(results.games.iter().copied())?;
            for (game, favourite) in games {
                writeln!(out, "{}", render_game(game, favourite))?;
            }
            if !results.categories.is_empty() {
                writeln!(out, "Categories: {}", results.categories.join(", "))?;
            }
        }
        Command::Category { name } => {
            let catalog = load_catalog(&shelf, catalog_flag).await?;
            let games = catalog.in_category(&name);
            if games.is_empty() {
                writeln!(out, "No {} games", name)?;
            }
            for (game, favourite) in shelf.with_favourite_status(games)? {
                writeln!(out, "{}", render_game(game, favourite))?;
            }
        }
        Command::Categories => {
            let catalog = load_catalog(&shelf, catalog_flag).await?;
            for category in catalog.categories() {
                writeln!(out, "{}", category)?;
            }
        }
        Command::Config(ConfigCommand::Show) => {
            let store = match shelf.store_path() {
                Some(path) => path.display().to_string(),
                None => "(unavailable)".to_string(),
            };
            let catalog = shelf
                .settings
                .get_catalog_url()
                .context("读取用户设置失败")?
                .unwrap_or_else(|| "(not set)".to_string());
            writeln!(out, "store: {}", store)?;
            writeln!(out, "catalog: {}", catalog)?;
            writeln!(out, "log level: {}", get_shelf_log_level())?;
        }
        Command::Config(ConfigCommand::SetCatalog { source }) => {
            shelf
                .settings
                .set_catalog_url(source.clone())
                .context("保存用户设置失败")?;
            writeln!(out, "catalog: {}", source)?;
        }
        Command::Config(ConfigCommand::ClearCatalog) => {
            shelf
                .settings
                .clear_catalog_url()
                .context("保存用户设置失败")?;
            writeln!(out, "catalog: (not set)")?;
        }
    }

    Ok(())
}

/// 解析目录来源：命令行/环境变量优先，其次为已保存的设置
fn resolve_catalog_source(shelf: &Shelf, flag: Option<&str>) -> Result<CatalogSource> {
    let raw = match flag {
        Some(raw) => raw.to_string(),
        None => shelf
            .settings
            .get_catalog_url()
            .context("读取用户设置失败")?
            .ok_or_else(|| {
                anyhow!("未配置游戏目录来源，请使用 --catalog 或 `config set-catalog`")
            })?,
    };
    // FromStr for CatalogSource 不会失败
    Ok(raw.parse().unwrap_or_else(|never| match never {}))
}

async fn load_catalog(shelf: &Shelf, flag: Option<&str>) -> Result<Catalog> {
    let source = resolve_catalog_source(shelf, flag)?;
    source
        .load()
        .await
        .with_context(|| format!("加载游戏目录失败: {}", source))
}

fn find_game<'a>(catalog: &'a Catalog, code: &str) -> Result<&'a Game> {
    catalog
        .find(code)
        .ok_or_else(|| anyhow!("游戏目录中没有 code 为 {} 的游戏", code))
}

/// 单行展示：收藏标记、code、名称、评分、主分类
pub fn render_game(game: &Game, favourite: bool) -> String {
    let mark = if favourite { '♥' } else { '·' };
    let rating = game
        .rating()
        .map(|rating| format!("{:.1}", rating))
        .unwrap_or_else(|| "-".to_string());
    let mut line = format!(
        "{} {:<12} {} ({})",
        mark,
        game.code().unwrap_or("?"),
        game.display_name(),
        rating
    );
    if let Some(category) = game.primary_category() {
        line.push_str(&format!(" [{}]", category));
    }
    line
}
