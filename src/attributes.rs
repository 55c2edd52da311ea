//! 属性层：计数器的外部字符串表示
//!
//! 所有字符串 → 整数的解析都集中在 [`parse_value`]，反向渲染在 [`reflect`]

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::counter::CounterState;
use crate::error::CounterError;

/// 四个可外部设置的数值字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    Counter,
    Start,
    Min,
    Max,
}

impl Attribute {
    pub const ALL: [Attribute; 4] = [
        Attribute::Counter,
        Attribute::Start,
        Attribute::Min,
        Attribute::Max,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Attribute::Counter => "counter",
            Attribute::Start => "start",
            Attribute::Min => "min",
            Attribute::Max => "max",
        }
    }

    /// 读取对应字段
    pub fn get(self, state: &CounterState) -> i64 {
        match self {
            Attribute::Counter => state.value,
            Attribute::Start => state.start,
            Attribute::Min => state.min,
            Attribute::Max => state.max,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = CounterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::ALL
            .into_iter()
            .find(|attr| attr.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CounterError::UnknownAttribute(s.to_string()))
    }
}

/// 宽松解析：十进制整数，或小数部分为零的有限浮点数
pub fn parse_value(attribute: Attribute, raw: &str) -> Result<i64, CounterError> {
    let invalid = || CounterError::InvalidConfigurationValue {
        attribute: attribute.name(),
        raw: raw.to_string(),
    };

    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Ok(n);
    }

    let float = trimmed.parse::<f64>().map_err(|_| invalid())?;
    if !float.is_finite() || float.fract() != 0.0 {
        return Err(invalid());
    }
    // 超出 i64 范围的整数浮点也拒绝
    if float < i64::MIN as f64 || float >= i64::MAX as f64 {
        return Err(invalid());
    }
    Ok(float as i64)
}

/// 把内部状态渲染回属性字符串
pub fn reflect(state: &CounterState) -> [(Attribute, String); 4] {
    Attribute::ALL.map(|attr| (attr, attr.get(state).to_string()))
}

/// 依次应用多组属性；先应用边界和 start，最后应用 counter
pub fn apply_all<'a, I>(state: &mut CounterState, pairs: I)
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut resolved: Vec<(Attribute, &str)> = Vec::new();
    for (name, raw) in pairs {
        match name.parse::<Attribute>() {
            Ok(attr) => resolved.push((attr, raw)),
            Err(err) => warn!(%err, "skipping attribute"),
        }
    }

    // 稳定排序：Counter 排在最后，同名属性保持原有顺序
    resolved.sort_by_key(|(attr, _)| *attr == Attribute::Counter);
    for (attr, raw) in resolved {
        state.set_attribute(attr, raw);
    }
}
