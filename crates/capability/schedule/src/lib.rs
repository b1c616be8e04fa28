//! 甘特图时间轴布局
//!
//! 把任务的日期区间与节点日期映射为可见窗口内的像素几何：
//! 任务条做窗口裁剪（完全在窗口外的任务直接剔除，不渲染负宽或
//! 越界的退化条），节点标记按可见谓词过滤。

use chrono::{Datelike, NaiveDate};

/// 默认单元格宽度（像素/天）。
pub const DEFAULT_CELL_WIDTH: i64 = 40;
/// 默认可见天数。
pub const DEFAULT_VISIBLE_DAYS: i64 = 60;

/// 任务条几何。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskBar {
    pub offset_px: i64,
    pub width_px: i64,
}

/// 可见窗口：起始日 + 可见天数 + 单元格宽度。
#[derive(Debug, Clone, Copy)]
pub struct TimelineWindow {
    start: NaiveDate,
    visible_days: i64,
    cell_width: i64,
}

impl TimelineWindow {
    /// 构造窗口；天数与单元格宽度下限均为 1。
    pub fn new(start: NaiveDate, visible_days: i64, cell_width: i64) -> Self {
        Self {
            start,
            visible_days: visible_days.max(1),
            cell_width: cell_width.max(1),
        }
    }

    /// 以锚点日期所在月份首日为窗口起点（月份导航）。
    pub fn from_month_of(anchor: NaiveDate, visible_days: i64, cell_width: i64) -> Self {
        let start = anchor.with_day(1).unwrap_or(anchor);
        Self::new(start, visible_days, cell_width)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn visible_days(&self) -> i64 {
        self.visible_days
    }

    pub fn cell_width(&self) -> i64 {
        self.cell_width
    }

    /// 窗口总宽度（像素）。
    pub fn width_px(&self) -> i64 {
        self.visible_days * self.cell_width
    }

    /// 日期相对窗口起点的天数差（可为负）。
    pub fn day_offset(&self, date: NaiveDate) -> i64 {
        (date - self.start).num_days()
    }

    /// 任务条布局。
    ///
    /// 裁剪规则：起止天数差截断到 [0, visible_days]，宽度下限 1 格；
    /// 完全在窗口外（结束于窗口前或开始于窗口后）的任务返回 None。
    pub fn task_bar(&self, start_date: NaiveDate, end_date: NaiveDate) -> Option<TaskBar> {
        let start_off = self.day_offset(start_date);
        let end_off = self.day_offset(end_date);
        if end_off < 0 || start_off > self.visible_days {
            return None;
        }
        let clipped_start = start_off.max(0);
        let clipped_end = end_off.min(self.visible_days);
        let width_days = (clipped_end - clipped_start).max(1);
        Some(TaskBar {
            offset_px: clipped_start * self.cell_width,
            width_px: width_days * self.cell_width,
        })
    }

    /// 节点标记位置；仅在 [0, 窗口宽度] 内可见，否则返回 None。
    pub fn milestone_marker(&self, date: NaiveDate) -> Option<i64> {
        let offset_px = self.day_offset(date) * self.cell_width;
        if offset_px >= 0 && offset_px <= self.width_px() {
            Some(offset_px)
        } else {
            None
        }
    }

    /// 当日指示线位置；当日不在窗口内时返回 None。
    pub fn today_marker(&self, today: NaiveDate) -> Option<i64> {
        let offset = self.day_offset(today);
        if offset >= 0 && offset <= self.visible_days {
            Some(offset * self.cell_width)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("date")
    }

    fn window() -> TimelineWindow {
        TimelineWindow::new(date(2025, 3, 1), 60, DEFAULT_CELL_WIDTH)
    }

    #[test]
    fn bar_inside_window() {
        let bar = window()
            .task_bar(date(2025, 3, 5), date(2025, 3, 12))
            .expect("bar");
        assert_eq!(bar.offset_px, 4 * 40);
        assert_eq!(bar.width_px, 7 * 40);
    }

    #[test]
    fn single_day_task_keeps_one_cell() {
        let bar = window()
            .task_bar(date(2025, 3, 5), date(2025, 3, 5))
            .expect("bar");
        assert_eq!(bar.width_px, 40);
        assert!(bar.offset_px >= 0);
    }

    #[test]
    fn bar_clipped_at_window_start() {
        let bar = window()
            .task_bar(date(2025, 2, 20), date(2025, 3, 10))
            .expect("bar");
        assert_eq!(bar.offset_px, 0);
        assert_eq!(bar.width_px, 9 * 40);
    }

    #[test]
    fn bar_clipped_at_window_end() {
        let bar = window()
            .task_bar(date(2025, 4, 25), date(2025, 5, 20))
            .expect("bar");
        assert_eq!(bar.offset_px, 55 * 40);
        assert_eq!(bar.width_px, 5 * 40);
    }

    #[test]
    fn task_fully_after_window_is_suppressed() {
        // 窗口 0..60 天，任务第 70..80 天：整体在窗口外，不渲染
        let start = date(2025, 3, 1) + chrono::Days::new(70);
        let end = date(2025, 3, 1) + chrono::Days::new(80);
        assert!(window().task_bar(start, end).is_none());
    }

    #[test]
    fn task_fully_before_window_is_suppressed() {
        assert!(
            window()
                .task_bar(date(2025, 1, 1), date(2025, 2, 20))
                .is_none()
        );
    }

    #[test]
    fn milestone_visibility_predicate() {
        let window = window();
        assert_eq!(window.milestone_marker(date(2025, 3, 1)), Some(0));
        assert_eq!(window.milestone_marker(date(2025, 3, 11)), Some(400));
        // 窗口宽度边界（第 60 天）仍可见
        assert_eq!(
            window.milestone_marker(date(2025, 4, 30)),
            Some(60 * 40)
        );
        assert_eq!(window.milestone_marker(date(2025, 2, 28)), None);
        assert_eq!(window.milestone_marker(date(2025, 5, 1)), None);
    }

    #[test]
    fn today_marker_range() {
        let window = window();
        assert_eq!(window.today_marker(date(2025, 3, 16)), Some(15 * 40));
        assert_eq!(window.today_marker(date(2025, 2, 1)), None);
        assert_eq!(window.today_marker(date(2025, 6, 1)), None);
    }

    #[test]
    fn month_anchor_snaps_to_first_day() {
        let window = TimelineWindow::from_month_of(date(2025, 3, 18), 60, 40);
        assert_eq!(window.start(), date(2025, 3, 1));
    }

    #[test]
    fn degenerate_window_is_clamped() {
        let window = TimelineWindow::new(date(2025, 3, 1), 0, 0);
        assert_eq!(window.visible_days(), 1);
        assert_eq!(window.cell_width(), 1);
    }
}
