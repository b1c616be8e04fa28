//! # Ops Storage 模块
//!
//! 本模块提供统一的目录存储抽象层。运行形态只有内存实现：
//! 演示数据在进程启动时生成注入，进程退出即丢弃。
//!
//! ## 架构设计
//!
//! 该模块采用分层架构，遵循以下原则：
//!
//! 1. **接口抽象层** (`traits.rs`)：定义所有目录存储的异步 Trait 接口
//! 2. **数据模型层** (`models.rs`)：定义存储相关的数据结构
//! 3. **错误处理层** (`error.rs`)：统一的存储错误类型
//! 4. **验证辅助层** (`validation.rs`)：操作者上下文验证
//! 5. **实现层**：
//!    - `in_memory/`：内存存储实现（演示与测试的唯一后端）
//!
//! ## 核心特性
//!
//! - **显式上下文**：所有存储接口都显式接收 `OperatorContext`，
//!   为后续接入真实后端时的鉴权留出接缝
//! - **异步边界**：接口全部 async，展示层不感知后端形态，
//!   替换为真实服务端实现时无需改动 handler
//! - **可扩展性**：通过 Trait 接口支持多种存储后端
//!
//! ## 模块说明
//!
//! ### 核心模块
//!
//! - [`models`]：数据模型定义（用户、站点、库存、工单、项目）
//! - [`traits`]：存储接口定义（CRUD 操作）
//! - [`error`]：存储错误类型定义
//! - [`validation`]：操作者上下文验证函数
//!
//! ### 存储实现
//!
//! - [`in_memory`]：内存存储实现
//!   - 使用 `RwLock<HashMap>` 提供线程安全的内存存储
//!   - 适用于单元测试、集成测试和本地演示
//!   - 内置默认操作者账户
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use ops_storage::{InMemorySiteStore, SiteStore};
//! use domain::OperatorContext;
//!
//! // 从演示数据构建存储
//! let site_store = InMemorySiteStore::from_records(records);
//!
//! // 查询站点
//! let sites = site_store.list_sites(&ctx).await?;
//! ```
//!
//! ## 设计约束
//!
//! - **禁止绕过存储层**：Handler 层禁止直接持有记录集合，统一通过 store 接口
//! - **显式上下文**：所有数据访问方法必须显式接收 `OperatorContext`
//! - **派生值不落库**：工单成本合计/利润/利润率、库存水位状态均为读取时派生
//!
//! ## 测试覆盖
//!
//! - 单元测试：内存实现的 CRUD 操作
//! - 目录测试：站点/库存/工单/项目/用户五类目录的增删改查

// 模块导出：将子模块的内容导出到 crate 根目录
pub mod error;
pub mod in_memory;
pub mod models;
pub mod traits;
pub mod validation;

// 导出常用类型到 crate 根目录，方便外部引用
pub use error::*;
pub use models::*;
pub use traits::*;
pub use validation::*;

// 导出内存存储实现类型
pub use in_memory::{
    InMemoryInventoryStore, InMemoryProjectStore, InMemoryServiceOrderStore, InMemorySiteStore,
    InMemoryUserStore,
};
