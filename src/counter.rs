use tracing::{debug, trace};

use crate::attributes::{self, Attribute};
use crate::error::CounterError;

/// 默认边界
pub const DEFAULT_MIN: i64 = 0;
pub const DEFAULT_MAX: i64 = 10;

/// 单步方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Down,
    Up,
}

impl Step {
    pub fn delta(self) -> i64 {
        match self {
            Step::Down => -1,
            Step::Up => 1,
        }
    }
}

/// 可配置的边界字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
    Start,
}

/// 计数器状态：一个带上下界的整数寄存器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterState {
    pub value: i64,
    pub start: i64,
    pub min: i64,
    pub max: i64,
}

impl Default for CounterState {
    fn default() -> Self {
        Self {
            value: 0,
            start: 0,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}

/// 不会 panic 的 clamp；min > max 时返回 max
pub fn clamp(n: i64, min: i64, max: i64) -> i64 {
    n.max(min).min(max)
}

impl CounterState {
    /// 尝试单步移动，越界时返回错误且状态不变
    pub fn try_step(&mut self, step: Step) -> Result<i64, CounterError> {
        let out_of_range = || CounterError::OutOfRangeTransition {
            value: self.value,
            delta: step.delta(),
            min: self.min,
            max: self.max,
        };

        let next = self.value.checked_add(step.delta()).ok_or_else(out_of_range)?;
        if next < self.min || next > self.max {
            return Err(out_of_range());
        }

        self.value = next;
        Ok(next)
    }

    /// 单步移动；越界的尝试被静默丢弃
    pub fn step(&mut self, step: Step) -> &Self {
        if let Err(err) = self.try_step(step) {
            trace!(%err, "step rejected");
        }
        self
    }

    /// 恢复到 start（此时才把 start 夹进边界）
    pub fn reset(&mut self) -> &Self {
        self.value = clamp(self.start, self.min, self.max);
        self
    }

    pub fn set_bound(&mut self, bound: Bound, n: i64) {
        match bound {
            Bound::Min => self.min = n,
            Bound::Max => self.max = n,
            Bound::Start => self.start = n,
        }
        if bound != Bound::Start {
            self.value = clamp(self.value, self.min, self.max);
        }
    }

    pub fn set_value(&mut self, n: i64) {
        self.value = clamp(n, self.min, self.max);
    }

    /// 按属性名写入字符串值，非法输入保留原值
    pub fn set_attribute(&mut self, attribute: Attribute, raw: &str) -> bool {
        match attributes::parse_value(attribute, raw) {
            Ok(n) => {
                match attribute {
                    Attribute::Counter => self.set_value(n),
                    Attribute::Start => self.set_bound(Bound::Start, n),
                    Attribute::Min => self.set_bound(Bound::Min, n),
                    Attribute::Max => self.set_bound(Bound::Max, n),
                }
                true
            }
            Err(err) => {
                debug!(%err, "attribute update ignored");
                false
            }
        }
    }

    pub fn is_at_min(&self) -> bool {
        self.value <= self.min
    }

    pub fn is_at_max(&self) -> bool {
        self.value >= self.max
    }
}
