use api_contract::{CreateSiteRequest, InventoryItemDto, SiteDto};
use chrono::NaiveDate;
use domain::{SiteStatus, StockStatus};
use serde_json::Value;

#[test]
fn site_dto_is_camel_case() {
    let dto = SiteDto {
        site_id: "SITE-1001".to_string(),
        name: "Nairobi Solar Site 1".to_string(),
        county: "Nairobi".to_string(),
        address: "123 Solar Avenue".to_string(),
        latitude: -1.2921,
        longitude: 36.8219,
        capacity_kw: 5.5,
        status: SiteStatus::Active,
        contact_name: None,
        contact_phone: None,
        contact_email: None,
        created_at_ms: 1_700_000_000_000,
    };
    let value = serde_json::to_value(dto).expect("serialize");
    assert!(value.get("siteId").is_some());
    assert!(value.get("capacityKw").is_some());
    assert!(value.get("createdAtMs").is_some());
    assert!(value.get("site_id").is_none());
    assert_eq!(value.get("status"), Some(&Value::String("active".to_string())));
}

#[test]
fn inventory_dto_carries_derived_fields() {
    let dto = InventoryItemDto {
        item_id: "INV-1001".to_string(),
        name: "Solar Panel 250W".to_string(),
        category: "Solar Panels".to_string(),
        selling_price: 15_000.0,
        buying_price: 12_000.0,
        quantity: 10,
        min_quantity: 10,
        location: "Warehouse A".to_string(),
        supplier: "SolarTech Ltd".to_string(),
        last_restocked: NaiveDate::from_ymd_opt(2025, 2, 15).expect("date"),
        stock_status: StockStatus::Low,
        margin_percent: 20.0,
    };
    let value = serde_json::to_value(dto).expect("serialize");
    assert_eq!(
        value.get("stockStatus"),
        Some(&Value::String("Low Stock".to_string()))
    );
    assert_eq!(
        value.get("lastRestocked"),
        Some(&Value::String("2025-02-15".to_string()))
    );
    assert!(value.get("marginPercent").is_some());
}

#[test]
fn create_site_request_accepts_camel_case() {
    let payload = r#"{
        "name": "Site 1",
        "county": "Nairobi",
        "latitude": -1.29,
        "longitude": 36.82,
        "capacityKw": 5.5,
        "status": "pending"
    }"#;
    let req: CreateSiteRequest = serde_json::from_str(payload).expect("parse");
    assert_eq!(req.name, "Site 1");
    assert_eq!(req.capacity_kw, Some(5.5));
    assert_eq!(req.status, Some(SiteStatus::Pending));
    assert!(req.address.is_none());
}
