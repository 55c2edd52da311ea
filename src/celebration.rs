//! 庆祝动画
//!
//! 计数器只依赖 [`Celebration::activate`]；动画本身由 [`ConfettiLayer`] 在视图层绘制。
//! 两者通过一个共享的帧计数（在场标记）连接，单线程，不需要锁。

use std::cell::Cell;
use std::rc::Rc;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};
use tracing::{debug, warn};

use crate::config::CelebrationConfig;
use crate::error::CelebrationError;

/// 庆祝效果的触发接口
pub trait Celebration {
    /// 触发一次效果，立即返回，不等待动画结束
    fn activate(&mut self) -> Result<(), CelebrationError>;
}

/// 关闭或加载失败时使用的空实现
#[derive(Debug, Default)]
pub struct Disabled;

impl Celebration for Disabled {
    fn activate(&mut self) -> Result<(), CelebrationError> {
        debug!("celebration disabled, nothing to do");
        Ok(())
    }
}

const PALETTE: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::LightBlue,
];

/// 触发端：设置在场标记
#[derive(Debug, Clone)]
pub struct ConfettiTrigger {
    remaining: Rc<Cell<u16>>,
    frames: u16,
}

impl Celebration for ConfettiTrigger {
    fn activate(&mut self) -> Result<(), CelebrationError> {
        self.remaining.set(self.frames);
        Ok(())
    }
}

/// 绘制端：在场标记非零时在区域上撒彩纸
#[derive(Debug, Clone)]
pub struct ConfettiLayer {
    remaining: Rc<Cell<u16>>,
    frames: u16,
    glyphs: Vec<char>,
}

impl ConfettiLayer {
    pub fn is_active(&self) -> bool {
        self.remaining.get() > 0
    }

    /// 推进一帧
    pub fn tick(&self) {
        let left = self.remaining.get();
        if left > 0 {
            self.remaining.set(left - 1);
        }
    }

    fn phase(&self) -> u16 {
        self.frames - self.remaining.get()
    }
}

impl Widget for &ConfettiLayer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.is_active() {
            return;
        }

        let phase = self.phase() as usize;
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                // 随帧下落的斜向条纹
                let seed = (x as usize) * 7 + (y as usize + 31 - phase % 31) * 13;
                if seed % 11 != 0 {
                    continue;
                }
                let glyph = self.glyphs[seed % self.glyphs.len()];
                let color = PALETTE[(seed / 11) % PALETTE.len()];
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(glyph).set_style(Style::default().fg(color));
                }
            }
        }
    }
}

/// 按配置加载彩纸效果
pub fn load(config: &CelebrationConfig) -> Result<(ConfettiTrigger, ConfettiLayer), CelebrationError> {
    if !config.enabled {
        return Err(CelebrationError::Unavailable("disabled by configuration".to_string()));
    }
    if config.frames == 0 {
        return Err(CelebrationError::ZeroFrames);
    }
    let glyphs: Vec<char> = config.glyphs.chars().filter(|c| !c.is_whitespace()).collect();
    if glyphs.is_empty() {
        return Err(CelebrationError::EmptyGlyphs);
    }

    let remaining = Rc::new(Cell::new(0));
    Ok((
        ConfettiTrigger {
            remaining: Rc::clone(&remaining),
            frames: config.frames,
        },
        ConfettiLayer {
            remaining,
            frames: config.frames,
            glyphs,
        },
    ))
}

/// 解析出最终使用的庆祝实现；失败只记录日志并退回 [`Disabled`]
pub fn resolve(config: &CelebrationConfig) -> (Box<dyn Celebration>, Option<ConfettiLayer>) {
    match load(config) {
        Ok((trigger, layer)) => (Box::new(trigger), Some(layer)),
        Err(err) => {
            if config.enabled {
                warn!(%err, "failed to load celebration, continuing without it");
            } else {
                debug!(%err, "celebration off");
            }
            (Box::new(Disabled), None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(frames: u16, glyphs: &str) -> CelebrationConfig {
        CelebrationConfig {
            enabled: true,
            frames,
            glyphs: glyphs.to_string(),
        }
    }

    #[test]
    fn test_load_rejects_bad_config() {
        assert_eq!(load(&config(0, "*")).unwrap_err(), CelebrationError::ZeroFrames);
        assert_eq!(load(&config(5, "  ")).unwrap_err(), CelebrationError::EmptyGlyphs);
        let mut off = config(5, "*");
        off.enabled = false;
        assert!(matches!(load(&off), Err(CelebrationError::Unavailable(_))));
    }

    #[test]
    fn test_resolve_falls_back() {
        let (mut celebration, layer) = resolve(&config(0, "*"));
        assert!(layer.is_none());
        assert!(celebration.activate().is_ok());
    }

    #[test]
    fn test_activate_runs_for_configured_frames() {
        let (mut trigger, layer) = load(&config(3, "*")).unwrap();
        assert!(!layer.is_active());

        trigger.activate().unwrap();
        assert!(layer.is_active());
        layer.tick();
        layer.tick();
        assert!(layer.is_active());
        layer.tick();
        assert!(!layer.is_active());
        layer.tick();
        assert!(!layer.is_active());
    }

    #[test]
    fn test_render_only_while_active() {
        let (mut trigger, layer) = load(&config(4, "*")).unwrap();
        let area = Rect::new(0, 0, 20, 6);

        let mut idle = Buffer::empty(area);
        (&layer).render(area, &mut idle);
        assert_eq!(idle, Buffer::empty(area));

        trigger.activate().unwrap();
        let mut busy = Buffer::empty(area);
        (&layer).render(area, &mut busy);
        assert!(busy.content().iter().any(|cell| cell.symbol() == "*"));
    }
}
