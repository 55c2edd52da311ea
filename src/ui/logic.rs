//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑；所有状态变化都经过这里

use tracing::{debug, warn};

use super::actions::Action;
use super::binding::CELEBRATION_VALUE;
use super::state::{App, AppMode};
use crate::attributes::{self, Attribute};
use crate::counter::Step;

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::Increment => self.step(Step::Up),
            Action::Decrement => self.step(Step::Down),
            Action::Reset => self.reset(),

            Action::StartEditAttribute(attr) => self.start_edit_attribute(attr),

            Action::Cancel => self.cancel(),

            Action::Submit => {
                if let AppMode::EditingAttribute(attr) = self.mode {
                    self.confirm_edit_attribute(attr);
                }
            }

            Action::Input(c) => {
                if matches!(self.mode, AppMode::EditingAttribute(_)) {
                    self.input_buffer.push(c);
                }
            }

            Action::DeleteChar => {
                if matches!(self.mode, AppMode::EditingAttribute(_)) {
                    self.input_buffer.pop();
                }
            }
        }
        false
    }

    // ============ 计数相关 ============

    pub fn step(&mut self, step: Step) {
        let before = self.counter.value;
        self.counter.step(step);
        self.after_update(before);
    }

    pub fn reset(&mut self) {
        let before = self.counter.value;
        self.counter.reset();
        self.after_update(before);
    }

    /// 值变成庆祝值时触发一次庆祝，不等待结果
    fn after_update(&mut self, before: i64) {
        let value = self.counter.value;
        if value == before {
            return;
        }
        debug!(from = before, to = value, "counter changed");
        self.message = None;

        if value == CELEBRATION_VALUE {
            if let Err(err) = self.celebration.activate() {
                warn!(%err, "celebration failed to activate");
            }
        }
    }

    // ============ 属性编辑相关 ============

    /// 开始编辑属性，输入框预填当前属性值
    pub fn start_edit_attribute(&mut self, attr: Attribute) {
        self.mode = AppMode::EditingAttribute(attr);
        self.input_buffer = attributes::reflect(&self.counter)
            .into_iter()
            .find(|(a, _)| *a == attr)
            .map(|(_, raw)| raw)
            .unwrap_or_default();
    }

    /// 确认编辑；非法输入保留原值
    pub fn confirm_edit_attribute(&mut self, attr: Attribute) {
        let before = self.counter.value;
        let applied = self.counter.set_attribute(attr, &self.input_buffer);
        // after_update 会清空提示，所以提示要在它之后设置
        self.after_update(before);
        if applied {
            self.message = Some(format!("{} = {}", attr, attr.get(&self.counter)));
        }
        self.mode = AppMode::Normal;
        self.input_buffer.clear();
    }

    // ============ 通用操作 ============

    /// 取消当前操作
    pub fn cancel(&mut self) {
        self.mode = AppMode::Normal;
        self.input_buffer.clear();
    }
}
