//! 权限码定义
//!
//! 权限以字符串码的形式挂在用户与操作者上下文上，
//! handler 层按接口要求逐一校验。

use crate::types::UserRole;

pub const VIEW_DASHBOARD: &str = "view_dashboard";
pub const VIEW_PROJECTS: &str = "view_projects";
pub const VIEW_SITES: &str = "view_sites";
pub const VIEW_REPORTS: &str = "view_reports";
pub const CREATE_PROJECTS: &str = "create_projects";
pub const EDIT_PROJECTS: &str = "edit_projects";
pub const CREATE_USERS: &str = "create_users";
pub const EDIT_USERS: &str = "edit_users";
pub const EDIT_SITES: &str = "edit_sites";
pub const EDIT_INVENTORY: &str = "edit_inventory";
pub const EDIT_SERVICE_ORDERS: &str = "edit_service_orders";

/// 角色默认权限集合。
///
/// 所有角色都持有基础查看权限；管理角色追加项目/用户/库存/工单的
/// 写权限，工程师角色追加站点与工单的写权限。
pub fn defaults_for_role(role: UserRole) -> Vec<String> {
    let mut permissions: Vec<String> = [VIEW_DASHBOARD, VIEW_PROJECTS, VIEW_SITES, VIEW_REPORTS]
        .iter()
        .map(|code| code.to_string())
        .collect();
    match role {
        UserRole::Management => {
            for code in [
                CREATE_PROJECTS,
                EDIT_PROJECTS,
                CREATE_USERS,
                EDIT_USERS,
                EDIT_SITES,
                EDIT_INVENTORY,
                EDIT_SERVICE_ORDERS,
            ] {
                permissions.push(code.to_string());
            }
        }
        UserRole::Engineer => {
            permissions.push(EDIT_SITES.to_string());
            permissions.push(EDIT_SERVICE_ORDERS.to_string());
        }
        UserRole::Contractor | UserRole::Client => {}
    }
    permissions
}
