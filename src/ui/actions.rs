//! Action 枚举定义 (Intent)
//!
//! 键盘和鼠标事件都先转化为语义化的 Action

use crate::attributes::Attribute;

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Increment,
    Decrement,
    Reset,

    StartEditAttribute(Attribute),

    // 输入框交互
    Cancel,      // Esc
    Submit,      // Enter
    Input(char), // 输入字符
    DeleteChar,  // Backspace
}
