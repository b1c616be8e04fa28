//! 甘特时间轴 handler
//!
//! - GET /projects/timeline - 在服务端完成时间轴布局计算
//!
//! 布局规则（ops-schedule）：
//! - 任务条裁剪到可见窗口，宽度下限 1 格，偏移不为负
//! - 完全在窗口外的任务直接剔除
//! - 节点标记按 [0, 窗口宽度] 可见谓词过滤
//! - 当日指示线仅在窗口内出现

use crate::AppState;
use crate::middleware::require_permission;
use crate::utils::response::storage_error;
use api_contract::{
    ApiResponse, TimelineBarDto, TimelineDto, TimelineMilestoneDto, TimelineProjectDto,
};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use domain::permissions;
use ops_schedule::{DEFAULT_CELL_WIDTH, DEFAULT_VISIBLE_DAYS, TimelineWindow};

/// 时间轴查询参数。
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineQuery {
    /// 窗口起始日；缺省取当日所在月份首日
    pub start: Option<NaiveDate>,
    /// 可见天数（缺省 60）
    pub days: Option<i64>,
    /// 单元格宽度（像素，缺省 40）
    pub cell: Option<i64>,
    /// 项目名称/编号子串搜索
    pub q: Option<String>,
}

/// 计算甘特时间轴布局
pub async fn get_timeline(
    State(state): State<AppState>,
    Query(query): Query<TimelineQuery>,
) -> Response {
    let ctx = &state.operator;
    if let Err(response) = require_permission(ctx, permissions::VIEW_PROJECTS) {
        return response;
    }
    let today = chrono::Utc::now().date_naive();
    let visible_days = query.days.unwrap_or(DEFAULT_VISIBLE_DAYS);
    let cell_width = query.cell.unwrap_or(DEFAULT_CELL_WIDTH);
    let window = match query.start {
        Some(start) => TimelineWindow::new(start, visible_days, cell_width),
        None => TimelineWindow::from_month_of(today, visible_days, cell_width),
    };

    let mut projects = match state.project_store.list_projects(ctx).await {
        Ok(projects) => projects,
        Err(err) => return storage_error(err),
    };
    if let Some(q) = query.q.as_deref().map(str::to_lowercase) {
        projects.retain(|project| {
            project.name.to_lowercase().contains(&q)
                || project.project_id.to_lowercase().contains(&q)
        });
    }
    projects.sort_by(|a, b| a.project_id.cmp(&b.project_id));

    let rows = projects
        .into_iter()
        .map(|project| {
            let rows = project
                .tasks
                .into_iter()
                .filter_map(|task| {
                    // 完全在窗口外的任务在此被剔除
                    let bar = window.task_bar(task.start_date, task.end_date)?;
                    let milestones = task
                        .milestones
                        .into_iter()
                        .filter_map(|milestone| {
                            let offset_px = window.milestone_marker(milestone.date)?;
                            Some(TimelineMilestoneDto {
                                milestone_id: milestone.milestone_id,
                                name: milestone.name,
                                date: milestone.date,
                                completed: milestone.completed,
                                offset_px,
                            })
                        })
                        .collect();
                    Some(TimelineBarDto {
                        task_id: task.task_id,
                        name: task.name,
                        status: task.status,
                        progress: task.progress,
                        offset_px: bar.offset_px,
                        width_px: bar.width_px,
                        milestones,
                    })
                })
                .collect();
            TimelineProjectDto {
                project_id: project.project_id,
                name: project.name,
                rows,
            }
        })
        .collect();

    ops_telemetry::record_timeline_rendered();
    let data = TimelineDto {
        window_start: window.start(),
        visible_days: window.visible_days(),
        cell_width: window.cell_width(),
        width_px: window.width_px(),
        today_offset_px: window.today_marker(today),
        projects: rows,
    };
    (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
}
