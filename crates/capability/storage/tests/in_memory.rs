use domain::{OperatorContext, UserRole};
use ops_storage::{InMemoryUserStore, UserStore};

fn operator_ctx() -> OperatorContext {
    OperatorContext::new("user-1", "Demo Operator", UserRole::Management, Vec::new())
}

#[tokio::test]
async fn find_default_operator() {
    let store = InMemoryUserStore::with_default_operator();
    let ctx = operator_ctx();
    let user = store
        .find_by_name(&ctx, "Demo Operator")
        .await
        .expect("query")
        .expect("operator");
    assert_eq!(user.user_id, "user-1");
    assert_eq!(user.role, UserRole::Management);
    assert!(user.permissions.iter().any(|code| code == "edit_sites"));
}

#[tokio::test]
async fn empty_context_is_rejected() {
    let store = InMemoryUserStore::with_default_operator();
    let ctx = OperatorContext::default();
    let err = store.list_users(&ctx).await.expect_err("operator required");
    assert_eq!(err.to_string(), "operator required");
}
