mod attributes;
mod celebration;
mod config;
mod counter;
mod error;
mod terminal;
mod ui;

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event;
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::{Config, LogConfig};
use crate::counter::CounterState;
use crate::terminal::TerminalSession;
use crate::ui::{App, render};

/// 动画帧间隔
const FRAME: Duration = Duration::from_millis(50);

/// 终端里的有界计数器
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// 配置文件路径（默认 ~/.config/tally/config.toml）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 初始值
    #[arg(long)]
    counter: Option<String>,

    /// 重置时恢复的值
    #[arg(long)]
    start: Option<String>,

    /// 下界
    #[arg(long, allow_hyphen_values = true)]
    min: Option<String>,

    /// 上界
    #[arg(long, allow_hyphen_values = true)]
    max: Option<String>,

    /// 关闭庆祝动画
    #[arg(long)]
    no_celebration: bool,
}

impl Args {
    fn attribute_pairs(&self) -> Vec<(String, String)> {
        [
            ("counter", &self.counter),
            ("start", &self.start),
            ("min", &self.min),
            ("max", &self.max),
        ]
        .into_iter()
        .filter_map(|(name, raw)| raw.as_ref().map(|raw| (name.to_string(), raw.clone())))
        .collect()
    }
}

/// 默认值 < 配置文件 < 命令行
fn initial_state(config: &Config, args: &Args) -> CounterState {
    let mut pairs = config.attribute_pairs();
    pairs.extend(args.attribute_pairs());

    let mut state = CounterState::default();
    attributes::apply_all(
        &mut state,
        pairs.iter().map(|(name, raw)| (name.as_str(), raw.as_str())),
    );
    state
}

/// 日志写到文件，避免破坏 TUI；打不开文件就不记日志
fn init_tracing(log: &LogConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let log_file = dirs::data_dir()
        .map(|dir| dir.join("tally"))
        .and_then(|dir| fs::create_dir_all(&dir).ok().map(|()| dir.join("tally.log")))
        .and_then(|path| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .ok()
                .map(|file| (path, file))
        });

    match log_file {
        Some((path, file)) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter)
                .init();
            info!(path = %path.display(), "logging initialized");
        }
        None => tracing_subscriber::registry().with(env_filter).init(),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => config::config_dir()?.join("config.toml"),
    };
    let mut config = config::load_config(&config_path)?;
    if args.no_celebration {
        config.celebration.enabled = false;
    }

    init_tracing(&config.log);

    let counter = initial_state(&config, &args);
    info!(?counter, config = %config_path.display(), "starting");

    let (celebration, confetti) = celebration::resolve(&config.celebration);
    let mut app = App::new(counter, celebration, confetti);

    // 会话离开作用域时恢复终端
    let result = {
        let mut session = TerminalSession::new()?;
        run_app(&mut session.terminal, &mut app)
    };

    info!(value = app.counter.value, "exiting");
    Ok(result?)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if event::poll(FRAME)? {
            let event = event::read()?;
            if ui::handle_event(app, &event) {
                break;
            }
        }
        app.tick();
    }
    Ok(())
}
