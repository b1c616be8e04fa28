//! 验证辅助函数
//!
//! 提供统一的验证逻辑，确保数据一致性：
//! - ensure_operator：验证操作者 ID 非空
//!
//! 使用场景：
//! - 所有数据访问前验证操作者上下文
//!   （演示进程固定一名操作者，但接口契约仍要求显式携带）

use crate::error::StorageError;
use domain::OperatorContext;

/// 验证操作者 ID 非空
///
/// 确保所有数据访问都有有效的操作者上下文。
pub fn ensure_operator(ctx: &OperatorContext) -> Result<(), StorageError> {
    if ctx.user_id.is_empty() {
        return Err(StorageError::new("operator required"));
    }
    Ok(())
}
