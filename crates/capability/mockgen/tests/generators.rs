use chrono::NaiveDate;
use domain::{StockStatus, TaskStatus};
use ops_mockgen::{CatalogSizes, MockGenerator, inventory_catalog};

fn reference_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).expect("date")
}

#[test]
fn same_seed_generates_same_catalog() {
    let sizes = CatalogSizes::default();
    let first = MockGenerator::new(42, reference_day()).catalog(sizes);
    let second = MockGenerator::new(42, reference_day()).catalog(sizes);

    let site_ids = |catalog: &ops_mockgen::MockCatalog| {
        catalog
            .sites
            .iter()
            .map(|site| (site.site_id.clone(), site.latitude, site.longitude))
            .collect::<Vec<_>>()
    };
    assert_eq!(site_ids(&first), site_ids(&second));

    let invoices = |catalog: &ops_mockgen::MockCatalog| {
        catalog
            .service_orders
            .iter()
            .map(|order| (order.order_id.clone(), order.invoice_amount))
            .collect::<Vec<_>>()
    };
    assert_eq!(invoices(&first), invoices(&second));

    let task_spans = |catalog: &ops_mockgen::MockCatalog| {
        catalog
            .projects
            .iter()
            .flat_map(|project| project.tasks.iter())
            .map(|task| (task.task_id.clone(), task.start_date, task.end_date))
            .collect::<Vec<_>>()
    };
    assert_eq!(task_spans(&first), task_spans(&second));
}

#[test]
fn different_seeds_diverge() {
    let sizes = CatalogSizes::default();
    let first = MockGenerator::new(1, reference_day()).catalog(sizes);
    let second = MockGenerator::new(2, reference_day()).catalog(sizes);
    let lats = |catalog: &ops_mockgen::MockCatalog| {
        catalog
            .sites
            .iter()
            .map(|site| site.latitude)
            .collect::<Vec<_>>()
    };
    assert_ne!(lats(&first), lats(&second));
}

#[test]
fn inventory_catalog_is_fixed() {
    let items = inventory_catalog();
    assert_eq!(items.len(), 10);
    let panel = &items[0];
    assert_eq!(panel.item_id, "INV-1001");
    assert_eq!(panel.selling_price, 15_000.0);
    assert_eq!(panel.buying_price, 12_000.0);
    assert_eq!(panel.stock_status(), StockStatus::InStock);
    // 目录内无低于补货阈值的条目
    assert!(items.iter().all(|item| item.quantity > item.min_quantity));
}

#[test]
fn generated_records_hold_invariants() {
    let catalog = MockGenerator::new(7, reference_day()).catalog(CatalogSizes::default());

    for site in &catalog.sites {
        assert!((-2.3..=-0.2).contains(&site.latitude));
        assert!((35.8..=37.9).contains(&site.longitude));
        assert!(site.capacity_kw >= 1.0 && site.capacity_kw <= 10.0);
    }

    assert!((10..=15).contains(&catalog.projects.len()));
    for project in &catalog.projects {
        assert!(project.progress <= 100);
        assert!((3..=8).contains(&project.tasks.len()));
        assert!((3..=5).contains(&project.milestones.len()));
        for task in &project.tasks {
            assert!(task.end_date >= task.start_date);
            assert!(task.progress <= 100);
            if task.status == TaskStatus::Completed {
                assert_eq!(task.progress, 100);
            }
            for milestone in &task.milestones {
                // 展示性完成标记与基准日一致
                assert_eq!(milestone.completed, milestone.date < reference_day());
                assert!(milestone.date >= task.start_date);
                assert!(milestone.date <= task.end_date);
            }
        }
    }

    for order in &catalog.service_orders {
        assert!(!order.parts_used.is_empty());
        assert!(order.invoice_amount > 0.0);
        assert!(order.labor_hours >= 1.0 && order.labor_hours <= 8.0);
        if order.status == domain::ServiceOrderStatus::Completed {
            assert!(order.completed_date.is_some());
        } else {
            assert!(order.completed_date.is_none());
        }
    }

    for user in &catalog.users {
        assert!(!user.permissions.is_empty());
        assert!(user.email.contains('@'));
    }
}
