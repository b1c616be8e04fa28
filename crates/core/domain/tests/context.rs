use domain::permissions;
use domain::{OperatorContext, UserRole};

#[test]
fn operator_context_builds() {
    let ctx = OperatorContext::new(
        "user-1",
        "admin",
        UserRole::Management,
        vec!["view_sites".to_string()],
    );

    assert_eq!(ctx.user_id, "user-1");
    assert_eq!(ctx.username, "admin");
    assert_eq!(ctx.role, UserRole::Management);
    assert!(ctx.has_permission("view_sites"));
    assert!(!ctx.has_permission("edit_sites"));
}

#[test]
fn management_defaults_include_write_codes() {
    let codes = permissions::defaults_for_role(UserRole::Management);
    assert!(codes.iter().any(|code| code == permissions::EDIT_USERS));
    assert!(codes.iter().any(|code| code == permissions::CREATE_PROJECTS));
    assert!(codes.iter().any(|code| code == permissions::VIEW_DASHBOARD));
}

#[test]
fn client_defaults_are_read_only() {
    let codes = permissions::defaults_for_role(UserRole::Client);
    assert!(codes.iter().any(|code| code == permissions::VIEW_REPORTS));
    assert!(!codes.iter().any(|code| code == permissions::EDIT_SITES));
    assert!(!codes.iter().any(|code| code == permissions::EDIT_USERS));
}

#[test]
fn status_labels_round_trip() {
    let status: domain::ServiceOrderStatus =
        serde_json::from_str(r#""On Hold""#).expect("parse");
    assert_eq!(status, domain::ServiceOrderStatus::OnHold);
    assert_eq!(
        serde_json::to_string(&domain::StockStatus::Low).expect("serialize"),
        r#""Low Stock""#
    );
}
