//! 内存存储实现模块
//!
//! 进程内演示数据的唯一存储形态：启动时由 mockgen 生成目录并注入，
//! 进程退出即丢弃（无持久化）。
//!
//! 包含以下实现：
//! - UserStore: InMemoryUserStore
//! - SiteStore: InMemorySiteStore
//! - InventoryStore: InMemoryInventoryStore
//! - ServiceOrderStore: InMemoryServiceOrderStore
//! - ProjectStore: InMemoryProjectStore

pub mod inventory;
pub mod project;
pub mod service_order;
pub mod site;
pub mod user;

pub use inventory::*;
pub use project::*;
pub use service_order::*;
pub use site::*;
pub use user::*;
