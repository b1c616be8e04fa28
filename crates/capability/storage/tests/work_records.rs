use chrono::NaiveDate;
use domain::{
    OperatorContext, ProjectStatus, ServiceOrderPriority, ServiceOrderStatus, ServiceType,
    TaskStatus, UserRole,
};
use ops_storage::{
    InMemoryProjectStore, InMemoryServiceOrderStore, PartUsage, ProjectRecord, ProjectStore,
    ProjectUpdate, ServiceOrderRecord, ServiceOrderStore, ServiceOrderUpdate, TaskRecord,
};

fn operator_ctx() -> OperatorContext {
    OperatorContext::new("user-1", "Demo Operator", UserRole::Management, Vec::new())
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("date")
}

fn sample_order(order_id: &str) -> ServiceOrderRecord {
    ServiceOrderRecord {
        order_id: order_id.to_string(),
        title: "Quarterly Maintenance - Nairobi Solar Site 12".to_string(),
        site_id: "SITE-1012".to_string(),
        site_name: "Nairobi Solar Site 12".to_string(),
        county: "Nairobi".to_string(),
        service_type: ServiceType::Maintenance,
        status: ServiceOrderStatus::Scheduled,
        priority: ServiceOrderPriority::Medium,
        scheduled_date: date(2025, 3, 15),
        completed_date: None,
        technician_id: "TECH-001".to_string(),
        technician_name: "John Doe".to_string(),
        description: "Quarterly maintenance service.".to_string(),
        parts_used: vec![PartUsage {
            item_id: "INV-1005".to_string(),
            name: "Solar Cable 10m".to_string(),
            quantity: 2,
            unit_price: 2_500.0,
            buying_price: 1_800.0,
        }],
        labor_hours: 4.0,
        labor_rate: 3_500.0,
        travel_cost: 1_500.0,
        other_costs: 500.0,
        invoice_amount: 25_000.0,
    }
}

fn sample_project(project_id: &str) -> ProjectRecord {
    ProjectRecord {
        project_id: project_id.to_string(),
        name: "Nairobi Solar Project 1".to_string(),
        county: "Nairobi".to_string(),
        location: "Nairobi, Kenya".to_string(),
        capacity_kw: 6.4,
        status: ProjectStatus::InProgress,
        start_date: date(2025, 1, 10),
        target_completion_date: date(2025, 5, 10),
        actual_completion_date: None,
        progress: 40,
        milestones: Vec::new(),
        tasks: vec![TaskRecord {
            task_id: "OFGEN-1000-T1".to_string(),
            name: "Site Assessment".to_string(),
            start_date: date(2025, 1, 10),
            end_date: date(2025, 1, 17),
            progress: 100,
            status: TaskStatus::Completed,
            assignee: None,
            milestones: Vec::new(),
        }],
    }
}

#[tokio::test]
async fn service_order_in_memory_crud() {
    let store = InMemoryServiceOrderStore::new();
    let ctx = operator_ctx();
    store
        .create_order(&ctx, sample_order("SO-1001"))
        .await
        .expect("create");

    let updated = store
        .update_order(
            &ctx,
            "SO-1001",
            ServiceOrderUpdate {
                status: Some(ServiceOrderStatus::Completed),
                completed_date: Some(date(2025, 3, 16)),
                ..ServiceOrderUpdate::default()
            },
        )
        .await
        .expect("update")
        .expect("order");
    assert_eq!(updated.status, ServiceOrderStatus::Completed);
    assert_eq!(updated.completed_date, Some(date(2025, 3, 16)));
    // 用料快照保持不变
    assert_eq!(updated.parts_used.len(), 1);

    assert!(store.delete_order(&ctx, "SO-1001").await.expect("delete"));
}

#[tokio::test]
async fn missing_order_update_returns_none() {
    let store = InMemoryServiceOrderStore::new();
    let ctx = operator_ctx();
    let updated = store
        .update_order(&ctx, "SO-9999", ServiceOrderUpdate::default())
        .await
        .expect("update");
    assert!(updated.is_none());
}

#[tokio::test]
async fn project_in_memory_crud() {
    let store = InMemoryProjectStore::new();
    let ctx = operator_ctx();
    store
        .create_project(&ctx, sample_project("OFGEN-1000"))
        .await
        .expect("create");

    let list = store.list_projects(&ctx).await.expect("list");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].tasks.len(), 1);

    let updated = store
        .update_project(
            &ctx,
            "OFGEN-1000",
            ProjectUpdate {
                progress: Some(120),
                ..ProjectUpdate::default()
            },
        )
        .await
        .expect("update")
        .expect("project");
    // 进度上限 100
    assert_eq!(updated.progress, 100);
}
