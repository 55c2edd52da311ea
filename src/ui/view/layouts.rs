use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 在区域中心取一个按百分比缩放的矩形
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// 在区域中垂直居中取固定高度的一条
pub fn centered_row(height: u16, r: Rect) -> Rect {
    let height = height.min(r.height);
    Rect {
        y: r.y + (r.height - height) / 2,
        height,
        ..r
    }
}
