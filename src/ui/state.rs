//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use ratatui::layout::Rect;

use crate::attributes::Attribute;
use crate::celebration::{Celebration, ConfettiLayer};
use crate::counter::CounterState;

/// 应用状态
pub struct App {
    pub counter: CounterState,
    pub mode: AppMode,
    pub input_buffer: String,
    pub message: Option<String>,
    /// 上一帧各按钮的位置，用于鼠标点击
    pub hitboxes: Vec<(Rect, Control)>,
    pub confetti: Option<ConfettiLayer>,
    pub(super) celebration: Box<dyn Celebration>,
}

/// 应用模式
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    EditingAttribute(Attribute),
}

/// 可点击的控件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Decrement,
    Increment,
    Reset,
}

impl App {
    /// 创建新的应用实例
    pub fn new(
        counter: CounterState,
        celebration: Box<dyn Celebration>,
        confetti: Option<ConfettiLayer>,
    ) -> Self {
        Self {
            counter,
            mode: AppMode::Normal,
            input_buffer: String::new(),
            message: None,
            hitboxes: Vec::new(),
            confetti,
            celebration,
        }
    }

    /// 庆祝动画是否正在播放
    pub fn is_celebrating(&self) -> bool {
        self.confetti.as_ref().is_some_and(ConfettiLayer::is_active)
    }

    /// 推进一帧动画
    pub fn tick(&mut self) {
        if let Some(confetti) = &self.confetti {
            confetti.tick();
        }
    }
}
