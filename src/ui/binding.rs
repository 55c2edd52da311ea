//! 状态 → 呈现 的映射
//!
//! 每次渲染都从 [`CounterState`] 重新计算，不保存任何派生状态

use ratatui::style::{Color, Modifier, Style};

use crate::counter::CounterState;

/// 高亮值 A
pub const HIGHLIGHT_A_VALUE: i64 = 18;
/// 高亮值 B，同时也是触发庆祝的值
pub const CELEBRATION_VALUE: i64 = 21;

/// 颜色状态，按优先级只取第一个命中的
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorState {
    HighlightA,
    HighlightB,
    AtMin,
    AtMax,
}

impl ColorState {
    pub fn of(state: &CounterState) -> Option<Self> {
        let value = state.value;
        if value == HIGHLIGHT_A_VALUE {
            Some(ColorState::HighlightA)
        } else if value == CELEBRATION_VALUE {
            Some(ColorState::HighlightB)
        } else if value == state.min {
            Some(ColorState::AtMin)
        } else if value == state.max {
            Some(ColorState::AtMax)
        } else {
            None
        }
    }

    pub fn color(self) -> Color {
        match self {
            ColorState::HighlightA => Color::Magenta,
            ColorState::HighlightB => Color::Yellow,
            ColorState::AtMin => Color::Blue,
            ColorState::AtMax => Color::Red,
        }
    }
}

/// 派生出的呈现状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    Normal,
    Bounded,
    Celebrating,
}

/// 一次同步所需的全部呈现信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub text: String,
    pub increment_disabled: bool,
    pub decrement_disabled: bool,
    pub color: Option<ColorState>,
    pub bold: bool,
}

impl Binding {
    pub fn of(state: &CounterState) -> Self {
        Self {
            text: state.value.to_string(),
            increment_disabled: state.is_at_max(),
            decrement_disabled: state.is_at_min(),
            color: ColorState::of(state),
            bold: state.value == state.min || state.value == state.max,
        }
    }

    pub fn value_style(&self) -> Style {
        let mut style = Style::default().fg(self.color.map_or(Color::White, ColorState::color));
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }

    /// 动画仍在播放但值已离开庆祝值时，不再算作庆祝状态
    pub fn render_state(&self, celebrating: bool) -> RenderState {
        if celebrating && self.color == Some(ColorState::HighlightB) {
            RenderState::Celebrating
        } else if self.bold {
            RenderState::Bounded
        } else {
            RenderState::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(value: i64, min: i64, max: i64) -> CounterState {
        CounterState {
            value,
            start: min,
            min,
            max,
        }
    }

    #[test]
    fn test_plain_value() {
        let binding = Binding::of(&state(4, 0, 10));
        assert_eq!(binding.text, "4");
        assert!(!binding.increment_disabled);
        assert!(!binding.decrement_disabled);
        assert_eq!(binding.color, None);
        assert!(!binding.bold);
        assert_eq!(binding.render_state(false), RenderState::Normal);
    }

    #[test]
    fn test_at_max() {
        let binding = Binding::of(&state(10, 0, 10));
        assert!(binding.increment_disabled);
        assert!(!binding.decrement_disabled);
        assert_eq!(binding.color, Some(ColorState::AtMax));
        assert!(binding.bold);
        assert_eq!(binding.render_state(false), RenderState::Bounded);
        assert!(binding.value_style().add_modifier.contains(Modifier::BOLD));
        assert_eq!(binding.value_style().fg, Some(Color::Red));
    }

    #[test]
    fn test_at_min() {
        let binding = Binding::of(&state(-3, -3, 10));
        assert_eq!(binding.text, "-3");
        assert!(binding.decrement_disabled);
        assert_eq!(binding.color, Some(ColorState::AtMin));
        assert!(binding.bold);
    }

    #[test]
    fn test_highlight_wins_over_bounds() {
        let binding = Binding::of(&state(18, 18, 30));
        assert_eq!(binding.color, Some(ColorState::HighlightA));
        // 加粗与颜色互不影响
        assert!(binding.bold);

        let binding = Binding::of(&state(21, 0, 21));
        assert_eq!(binding.color, Some(ColorState::HighlightB));
        assert!(binding.increment_disabled);
    }

    #[test]
    fn test_min_wins_over_max_when_equal() {
        let binding = Binding::of(&state(5, 5, 5));
        assert_eq!(binding.color, Some(ColorState::AtMin));
        assert!(binding.increment_disabled && binding.decrement_disabled);
    }

    #[test]
    fn test_celebrating_overrides() {
        let binding = Binding::of(&state(21, 0, 25));
        assert_eq!(binding.render_state(true), RenderState::Celebrating);
        assert_eq!(binding.render_state(false), RenderState::Normal);
    }

    #[test]
    fn test_celebrating_requires_celebration_value() {
        // 动画还没播完就离开了 21
        let binding = Binding::of(&state(22, 0, 25));
        assert_eq!(binding.render_state(true), RenderState::Normal);

        let binding = Binding::of(&state(25, 0, 25));
        assert_eq!(binding.render_state(true), RenderState::Bounded);
    }
}
