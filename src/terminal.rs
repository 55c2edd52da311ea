//! 终端会话
//!
//! 创建时接管终端（raw 模式、备用屏幕、鼠标捕获），Drop 时归还。
//! 键盘/鼠标监听的生命周期因此和会话对象绑定。

use std::io::{self, Stdout, Write};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, warn};

pub struct TerminalSession {
    pub terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            release(&mut stdout, disable_raw_mode);
            return Err(err);
        }

        match Terminal::new(CrosstermBackend::new(io::stdout())) {
            Ok(terminal) => {
                debug!("terminal attached");
                Ok(Self { terminal })
            }
            Err(err) => {
                release(&mut stdout, disable_raw_mode);
                Err(err)
            }
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut failures = release(self.terminal.backend_mut(), disable_raw_mode);
        if let Err(err) = self.terminal.show_cursor() {
            warn!(%err, "failed to show cursor");
            failures += 1;
        }

        if failures == 0 {
            debug!("terminal detached");
        }
    }
}

/// 归还终端，每一步单独执行，失败只记日志；返回失败的步数
fn release<W: Write>(out: &mut W, disable_raw: fn() -> io::Result<()>) -> usize {
    let mut failures = 0;

    if let Err(err) = disable_raw() {
        warn!(%err, "failed to disable raw mode");
        failures += 1;
    }
    if let Err(err) = execute!(out, LeaveAlternateScreen) {
        warn!(%err, "failed to leave alternate screen");
        failures += 1;
    }
    if let Err(err) = execute!(out, DisableMouseCapture) {
        warn!(%err, "failed to disable mouse capture");
        failures += 1;
    }

    failures
}
