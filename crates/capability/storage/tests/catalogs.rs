use chrono::NaiveDate;
use domain::{OperatorContext, SiteStatus, StockStatus, UserRole};
use ops_storage::{
    InMemoryInventoryStore, InMemorySiteStore, InventoryItemRecord, InventoryItemUpdate,
    InventoryStore, SiteRecord, SiteStore, SiteUpdate,
};

fn operator_ctx() -> OperatorContext {
    OperatorContext::new("user-1", "Demo Operator", UserRole::Management, Vec::new())
}

fn sample_site(site_id: &str) -> SiteRecord {
    SiteRecord {
        site_id: site_id.to_string(),
        name: "Nairobi Solar Site 1".to_string(),
        county: "Nairobi".to_string(),
        address: "123 Solar Avenue, Nairobi".to_string(),
        latitude: -1.2921,
        longitude: 36.8219,
        capacity_kw: 5.5,
        status: SiteStatus::Active,
        contact_name: Some("John Doe".to_string()),
        contact_phone: None,
        contact_email: None,
        created_at_ms: 1_700_000_000_000,
    }
}

fn sample_item(item_id: &str, quantity: i64, min_quantity: i64) -> InventoryItemRecord {
    InventoryItemRecord {
        item_id: item_id.to_string(),
        name: "Solar Panel 250W".to_string(),
        category: "Solar Panels".to_string(),
        selling_price: 15_000.0,
        buying_price: 12_000.0,
        quantity,
        min_quantity,
        location: "Warehouse A".to_string(),
        supplier: "SolarTech Ltd".to_string(),
        last_restocked: NaiveDate::from_ymd_opt(2025, 2, 15).expect("date"),
    }
}

#[tokio::test]
async fn site_in_memory_crud() {
    let store = InMemorySiteStore::new();
    let ctx = operator_ctx();
    let created = store
        .create_site(&ctx, sample_site("SITE-1001"))
        .await
        .expect("create");
    assert_eq!(created.site_id, "SITE-1001");

    let list = store.list_sites(&ctx).await.expect("list");
    assert_eq!(list.len(), 1);

    let updated = store
        .update_site(
            &ctx,
            "SITE-1001",
            SiteUpdate {
                status: Some(SiteStatus::Inactive),
                capacity_kw: Some(7.2),
                ..SiteUpdate::default()
            },
        )
        .await
        .expect("update")
        .expect("site");
    assert_eq!(updated.status, SiteStatus::Inactive);
    assert_eq!(updated.capacity_kw, 7.2);

    assert!(store.delete_site(&ctx, "SITE-1001").await.expect("delete"));
    assert!(!store.delete_site(&ctx, "SITE-1001").await.expect("delete"));
}

#[tokio::test]
async fn duplicate_site_id_is_rejected() {
    let store = InMemorySiteStore::new();
    let ctx = operator_ctx();
    store
        .create_site(&ctx, sample_site("SITE-1001"))
        .await
        .expect("create");
    let err = store
        .create_site(&ctx, sample_site("SITE-1001"))
        .await
        .expect_err("duplicate");
    assert_eq!(err.to_string(), "site exists");
}

#[tokio::test]
async fn inventory_in_memory_crud() {
    let store = InMemoryInventoryStore::new();
    let ctx = operator_ctx();
    store
        .create_item(&ctx, sample_item("INV-1001", 25, 10))
        .await
        .expect("create");

    let found = store
        .find_item(&ctx, "INV-1001")
        .await
        .expect("find")
        .expect("item");
    assert_eq!(found.stock_status(), StockStatus::InStock);

    let updated = store
        .update_item(
            &ctx,
            "INV-1001",
            InventoryItemUpdate {
                quantity: Some(10),
                ..InventoryItemUpdate::default()
            },
        )
        .await
        .expect("update")
        .expect("item");
    // 数量等于补货阈值时即为低水位
    assert_eq!(updated.stock_status(), StockStatus::Low);
}

#[tokio::test]
async fn stock_boundary_is_low() {
    let item = sample_item("INV-1009", 25, 25);
    assert_eq!(item.stock_status(), StockStatus::Low);
    let item = sample_item("INV-1009", 26, 25);
    assert_eq!(item.stock_status(), StockStatus::InStock);
}
