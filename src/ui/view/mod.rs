//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::binding::{Binding, RenderState};
use super::state::{App, AppMode, Control};
use crate::attributes::{self, Attribute};
use components::{render_button, render_dialog_framework, render_input_widget};
use layouts::{centered_rect, centered_row};

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(7),    // 计数器
            Constraint::Length(3), // 属性
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_counter(frame, app, chunks[1]);
    render_attributes(frame, app, chunks[2]);
    render_help(frame, app, chunks[3]);

    if let AppMode::EditingAttribute(attr) = app.mode {
        render_edit_dialog(frame, app, attr);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("🔢 Tally 计数器")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_counter(frame: &mut Frame, app: &mut App, area: Rect) {
    let binding = Binding::of(&app.counter);
    let caption = match binding.render_state(app.is_celebrating()) {
        RenderState::Normal => "计数器",
        RenderState::Bounded => "计数器 · 已到边界",
        RenderState::Celebrating => "计数器 · 🎉",
    };

    let block = Block::default().title(caption).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let row = centered_row(3, inner);
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(7),  // −
            Constraint::Length(12), // 数值
            Constraint::Length(7),  // +
            Constraint::Length(2),
            Constraint::Length(11), // 重置
            Constraint::Min(0),
        ])
        .split(row);

    render_button(frame, cells[1], "−", binding.decrement_disabled);
    render_button(frame, cells[3], "+", binding.increment_disabled);
    render_button(frame, cells[5], "重置", false);

    let value = Paragraph::new(binding.text.as_str())
        .alignment(Alignment::Center)
        .style(binding.value_style())
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(value, cells[2]);

    if let Some(confetti) = &app.confetti {
        frame.render_widget(confetti, inner);
    }

    app.hitboxes.clear();
    app.hitboxes.push((cells[1], Control::Decrement));
    app.hitboxes.push((cells[3], Control::Increment));
    app.hitboxes.push((cells[5], Control::Reset));
}

fn render_attributes(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for (attr, raw) in attributes::reflect(&app.counter) {
        spans.push(Span::styled(
            format!("{}=", attr),
            Style::default().fg(Color::Gray),
        ));
        spans.push(Span::styled(
            format!("\"{}\"  ", raw),
            Style::default().fg(Color::Yellow),
        ));
    }

    let panel =
        Paragraph::new(Line::from(spans)).block(Block::default().title("属性").borders(Borders::ALL));
    frame.render_widget(panel, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match &app.mode {
        AppMode::Normal => {
            "[+/↑] 增加  [-/↓] 减少  [r] 重置  [c/s/n/x] 编辑 counter/start/min/max  [q] 退出"
        }
        AppMode::EditingAttribute(_) => "[Enter] 应用  [Esc] 取消",
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_edit_dialog(frame: &mut Frame, app: &App, attr: Attribute) {
    let area = centered_rect(50, 40, frame.area());
    let inner = render_dialog_framework(frame, area, &format!("编辑属性 {}", attr));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(inner);

    render_input_widget(frame, chunks[0], attr.name(), &app.input_buffer, Color::Yellow);

    let hint = Paragraph::new("按 Enter 应用，Esc 取消；非数字输入将被忽略")
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(hint, chunks[1]);
}
