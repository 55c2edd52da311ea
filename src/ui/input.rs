//! 输入事件映射 (Input -> Action)
//!
//! 将按键和鼠标事件转换为 Action

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::actions::Action;
use super::binding::Binding;
use super::state::{App, AppMode, Control};
use crate::attributes::Attribute;

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: &AppMode, key: KeyCode) -> Option<Action> {
    match mode {
        AppMode::Normal => match key {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('+' | '=' | 'k' | 'l') | KeyCode::Up | KeyCode::Right => {
                Some(Action::Increment)
            }
            KeyCode::Char('-' | '_' | 'j' | 'h') | KeyCode::Down | KeyCode::Left => {
                Some(Action::Decrement)
            }
            KeyCode::Char('r' | '0') => Some(Action::Reset),
            KeyCode::Char('c') => Some(Action::StartEditAttribute(Attribute::Counter)),
            KeyCode::Char('s') => Some(Action::StartEditAttribute(Attribute::Start)),
            KeyCode::Char('n') => Some(Action::StartEditAttribute(Attribute::Min)),
            KeyCode::Char('x') => Some(Action::StartEditAttribute(Attribute::Max)),
            _ => None,
        },
        AppMode::EditingAttribute(_) => match key {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
    }
}

/// 鼠标左键按下时，命中哪个控件就触发哪个；禁用的控件不响应
pub fn get_mouse_action(app: &App, mouse: MouseEvent) -> Option<Action> {
    if app.mode != AppMode::Normal || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    let position = Position::new(mouse.column, mouse.row);
    let (_, control) = app
        .hitboxes
        .iter()
        .find(|(rect, _)| rect.contains(position))?;

    let binding = Binding::of(&app.counter);
    match control {
        Control::Increment if !binding.increment_disabled => Some(Action::Increment),
        Control::Decrement if !binding.decrement_disabled => Some(Action::Decrement),
        Control::Reset => Some(Action::Reset),
        _ => None,
    }
}

/// 处理终端事件，返回 true 表示退出
pub fn handle_event(app: &mut App, event: &Event) -> bool {
    let action = match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => get_action(&app.mode, key.code),
        Event::Mouse(mouse) => get_mouse_action(app, *mouse),
        _ => None,
    };

    match action {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::celebration::Disabled;
    use crate::counter::CounterState;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use ratatui::layout::Rect;

    fn app_with_hitboxes(counter: CounterState) -> App {
        let mut app = App::new(counter, Box::new(Disabled), None);
        app.hitboxes = vec![
            (Rect::new(0, 0, 5, 3), Control::Decrement),
            (Rect::new(10, 0, 5, 3), Control::Increment),
            (Rect::new(20, 0, 7, 3), Control::Reset),
        ];
        app
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_shortcuts() {
        let normal = AppMode::Normal;
        assert_eq!(get_action(&normal, KeyCode::Char('+')), Some(Action::Increment));
        assert_eq!(get_action(&normal, KeyCode::Up), Some(Action::Increment));
        assert_eq!(get_action(&normal, KeyCode::Char('-')), Some(Action::Decrement));
        assert_eq!(get_action(&normal, KeyCode::Left), Some(Action::Decrement));
        assert_eq!(get_action(&normal, KeyCode::Char('r')), Some(Action::Reset));
        assert_eq!(
            get_action(&normal, KeyCode::Char('n')),
            Some(Action::StartEditAttribute(Attribute::Min))
        );
        assert_eq!(get_action(&normal, KeyCode::Char('z')), None);
    }

    #[test]
    fn test_editing_keys_become_input() {
        let editing = AppMode::EditingAttribute(Attribute::Max);
        assert_eq!(get_action(&editing, KeyCode::Char('+')), Some(Action::Input('+')));
        assert_eq!(get_action(&editing, KeyCode::Char('q')), Some(Action::Input('q')));
        assert_eq!(get_action(&editing, KeyCode::Enter), Some(Action::Submit));
        assert_eq!(get_action(&editing, KeyCode::Esc), Some(Action::Cancel));
    }

    #[test]
    fn test_click_hits_control() {
        let app = app_with_hitboxes(CounterState::default());
        assert_eq!(get_mouse_action(&app, click(12, 1)), Some(Action::Increment));
        assert_eq!(get_mouse_action(&app, click(22, 2)), Some(Action::Reset));
        assert_eq!(get_mouse_action(&app, click(7, 1)), None);
    }

    #[test]
    fn test_click_on_disabled_control_ignored() {
        // 默认 value == min，减少按钮禁用
        let app = app_with_hitboxes(CounterState::default());
        assert_eq!(get_mouse_action(&app, click(1, 1)), None);

        let mut moved = click(12, 1);
        moved.kind = MouseEventKind::Moved;
        assert_eq!(get_mouse_action(&app, moved), None);
    }

    #[test]
    fn test_handle_event_ignores_release() {
        let mut app = app_with_hitboxes(CounterState::default());
        let mut key = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(!handle_event(&mut app, &Event::Key(key)));
        assert_eq!(app.counter.value, 0);

        let press = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::NONE);
        assert!(!handle_event(&mut app, &Event::Key(press)));
        assert_eq!(app.counter.value, 1);

        let quit = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(handle_event(&mut app, &Event::Key(quit)));
    }
}
