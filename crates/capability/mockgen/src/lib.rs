//! 演示数据生成
//!
//! 种子化随机源（StdRng）驱动的目录数据合成器：同一种子与基准日
//! 生成完全相同的目录，测试可复现。数值区间与取值池沿用运营后台
//! 既有的演示数据形态（肯尼亚郡名、内罗毕坐标抖动、固定十件光伏
//! 物料等）。

use chrono::{Days, NaiveDate};
use domain::{
    MilestoneStatus, ProjectStatus, ServiceOrderPriority, ServiceOrderStatus, ServiceType,
    SiteStatus, TaskStatus, UserRole, UserStatus, permissions,
};
use ops_storage::{
    InventoryItemRecord, MilestoneRecord, PartUsage, ProjectRecord, ServiceOrderRecord,
    SiteRecord, TaskMilestone, TaskRecord, UserRecord,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// 郡名池。
pub const COUNTIES: [&str; 10] = [
    "Nairobi",
    "Mombasa",
    "Kisumu",
    "Nakuru",
    "Kiambu",
    "Uasin Gishu",
    "Meru",
    "Kakamega",
    "Kilifi",
    "Machakos",
];

const FIRST_NAMES: [&str; 10] = [
    "John", "Jane", "David", "Sarah", "Michael", "Grace", "Peter", "Mercy", "James", "Faith",
];

const LAST_NAMES: [&str; 10] = [
    "Doe", "Smith", "Mwangi", "Ochieng", "Kamau", "Wanjiku", "Otieno", "Njeri", "Kiprop", "Achieng",
];

const COMPANIES: [&str; 5] = [
    "SolarTech Ltd",
    "PowerSolutions Inc",
    "GreenVolt Contractors",
    "EquatorSun Energy",
    "Rift Valley Installers",
];

const TASK_NAMES: [&str; 8] = [
    "Site Assessment",
    "Permit Acquisition",
    "Material Procurement",
    "Installation",
    "Electrical Work",
    "Testing",
    "Grid Connection",
    "Client Handover",
];

const MILESTONE_TEMPLATES: [(&str, &str); 8] = [
    (
        "Site Assessment",
        "Initial site assessment and feasibility study",
    ),
    ("Permit Acquisition", "Obtain necessary permits and approvals"),
    (
        "Material Procurement",
        "Procure solar panels and other equipment",
    ),
    (
        "Installation Start",
        "Begin installation of mounting structures and panels",
    ),
    ("Electrical Work", "Complete electrical wiring and connections"),
    ("Testing", "System testing and quality assurance"),
    ("Grid Connection", "Connect system to the grid and finalize"),
    ("Handover", "Final inspection and client handover"),
];

/// 默认人工费率（KSH/小时）。
pub const DEFAULT_LABOR_RATE: f64 = 3_500.0;

/// 各目录生成数量。
#[derive(Debug, Clone, Copy)]
pub struct CatalogSizes {
    pub sites: usize,
    pub service_orders: usize,
    pub users: usize,
}

impl Default for CatalogSizes {
    fn default() -> Self {
        Self {
            sites: 15,
            service_orders: 12,
            users: 12,
        }
    }
}

/// 一次生成的完整演示目录。
#[derive(Debug, Clone)]
pub struct MockCatalog {
    pub sites: Vec<SiteRecord>,
    pub inventory: Vec<InventoryItemRecord>,
    pub service_orders: Vec<ServiceOrderRecord>,
    pub projects: Vec<ProjectRecord>,
    pub users: Vec<UserRecord>,
}

/// 种子化演示数据生成器。
pub struct MockGenerator {
    rng: StdRng,
    today: NaiveDate,
}

impl MockGenerator {
    /// 指定种子与基准日构造生成器。
    pub fn new(seed: u64, today: NaiveDate) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            today,
        }
    }

    /// 生成完整目录。
    pub fn catalog(&mut self, sizes: CatalogSizes) -> MockCatalog {
        let sites = self.sites(sizes.sites);
        let inventory = inventory_catalog();
        let projects = self.projects();
        let users = self.users(sizes.users, &projects, &sites);
        let service_orders = self.service_orders(sizes.service_orders, &sites, &inventory, &users);
        MockCatalog {
            sites,
            inventory,
            service_orders,
            projects,
            users,
        }
    }

    /// 生成站点目录。
    pub fn sites(&mut self, count: usize) -> Vec<SiteRecord> {
        (0..count)
            .map(|index| {
                let county = self.pick(&COUNTIES);
                SiteRecord {
                    site_id: format!("SITE-{}", 1000 + index),
                    name: format!("{} Solar Site {}", county, index + 1),
                    county: county.to_string(),
                    address: format!("Address {}, Kenya", index + 1),
                    latitude: -1.2921 + self.rng.gen_range(-1.0..1.0),
                    longitude: 36.8219 + self.rng.gen_range(-1.0..1.0),
                    capacity_kw: round2(self.rng.gen_range(1.0..10.0)),
                    status: if self.rng.gen_bool(0.8) {
                        SiteStatus::Active
                    } else {
                        SiteStatus::Inactive
                    },
                    contact_name: Some(self.person_name()),
                    contact_phone: Some(self.phone()),
                    contact_email: Some(format!("site{}@ofgen.co.ke", index + 1)),
                    created_at_ms: self.past_instant_ms(90),
                }
            })
            .collect()
    }

    /// 生成项目目录（10-15 个项目，含甘特任务与里程碑）。
    pub fn projects(&mut self) -> Vec<ProjectRecord> {
        let count = self.rng.gen_range(10..=15);
        (0..count)
            .map(|index| {
                let county = self.pick(&COUNTIES).to_string();
                let project_id = format!("OFGEN-{}", 1000 + index);
                let status = self.pick(&[
                    ProjectStatus::Planned,
                    ProjectStatus::InProgress,
                    ProjectStatus::OnHold,
                    ProjectStatus::Completed,
                ]);
                let progress = match status {
                    ProjectStatus::Planned => self.rng.gen_range(0..10),
                    ProjectStatus::InProgress => self.rng.gen_range(10..80),
                    ProjectStatus::OnHold => self.rng.gen_range(10..70),
                    ProjectStatus::Completed => 100,
                };
                let start_date = self.past_date(90);
                let target_completion_date =
                    start_date + Days::new(self.rng.gen_range(90..150) as u64);
                let actual_completion_date = match status {
                    ProjectStatus::Completed => {
                        Some(self.date_before(target_completion_date, 14))
                    }
                    _ => None,
                };
                let tasks = self.tasks(&project_id);
                let milestones = self.project_milestones();
                ProjectRecord {
                    project_id,
                    name: format!("{} Solar Project {}", county, index + 1),
                    location: format!("{county}, Kenya"),
                    county,
                    capacity_kw: round2(self.rng.gen_range(1.0..10.0)),
                    status,
                    start_date,
                    target_completion_date,
                    actual_completion_date,
                    progress,
                    milestones,
                    tasks,
                }
            })
            .collect()
    }

    /// 生成用户目录。
    pub fn users(
        &mut self,
        count: usize,
        projects: &[ProjectRecord],
        sites: &[SiteRecord],
    ) -> Vec<UserRecord> {
        (0..count)
            .map(|index| {
                let role = self.pick(&[
                    UserRole::Contractor,
                    UserRole::Engineer,
                    UserRole::Management,
                    UserRole::Client,
                ]);
                let name = self.person_name();
                let company = match role {
                    UserRole::Management => "Ofgen Solar".to_string(),
                    _ => self.pick(&COMPANIES).to_string(),
                };
                let email_host = match role {
                    UserRole::Management => "ofgen.co.ke".to_string(),
                    _ => format!(
                        "{}.com",
                        company.to_lowercase().replace(' ', "")
                    ),
                };
                let email = format!(
                    "{}@{}",
                    name.to_lowercase().replace(' ', "."),
                    email_host
                );
                // 角色决定关联范围：施工/工程角色挂多个项目与站点，
                // 客户只看自己的项目
                let (project_count, site_count) = match role {
                    UserRole::Contractor | UserRole::Engineer => {
                        (self.rng.gen_range(1..=3), self.rng.gen_range(1..=4))
                    }
                    UserRole::Client => (1, self.rng.gen_range(1..=2)),
                    UserRole::Management => (0, 0),
                };
                let assigned_projects = self.pick_names(projects.len(), project_count, |i| {
                    projects[i].name.clone()
                });
                let assigned_sites =
                    self.pick_names(sites.len(), site_count, |i| sites[i].name.clone());
                UserRecord {
                    user_id: format!("USR-{}", 1000 + index),
                    name,
                    email,
                    phone: self.phone(),
                    role,
                    status: self.pick(&[
                        UserStatus::Active,
                        UserStatus::Active,
                        UserStatus::Inactive,
                        UserStatus::Pending,
                    ]),
                    company,
                    permissions: permissions::defaults_for_role(role),
                    projects: assigned_projects,
                    sites: assigned_sites,
                    last_active_ms: self.past_instant_ms(30),
                    created_at_ms: self.past_instant_ms(365),
                }
            })
            .collect()
    }

    /// 生成工单目录（用料快照取自库存目录，开票金额围绕成本抖动，
    /// 覆盖全部利润分档）。
    pub fn service_orders(
        &mut self,
        count: usize,
        sites: &[SiteRecord],
        inventory: &[InventoryItemRecord],
        users: &[UserRecord],
    ) -> Vec<ServiceOrderRecord> {
        let technicians: Vec<&UserRecord> = users
            .iter()
            .filter(|user| {
                matches!(user.role, UserRole::Engineer | UserRole::Contractor)
            })
            .collect();
        (0..count)
            .map(|index| {
                let service_type = self.pick(&[
                    ServiceType::Installation,
                    ServiceType::Maintenance,
                    ServiceType::Repair,
                    ServiceType::Inspection,
                ]);
                let (site_id, site_name, county) = match sites.choose(&mut self.rng) {
                    Some(site) => (
                        site.site_id.clone(),
                        site.name.clone(),
                        site.county.clone(),
                    ),
                    None => (
                        "SITE-1001".to_string(),
                        "Nairobi Solar Site 1".to_string(),
                        "Nairobi".to_string(),
                    ),
                };
                let (technician_id, technician_name) = match technicians.choose(&mut self.rng) {
                    Some(user) => (user.user_id.clone(), user.name.clone()),
                    None => ("TECH-001".to_string(), "John Doe".to_string()),
                };
                let status = self.pick(&[
                    ServiceOrderStatus::Scheduled,
                    ServiceOrderStatus::InProgress,
                    ServiceOrderStatus::Completed,
                    ServiceOrderStatus::Cancelled,
                    ServiceOrderStatus::OnHold,
                ]);
                let scheduled_offset = self.rng.gen_range(-45i64..45);
                let scheduled_date = shift_date(self.today, scheduled_offset);
                let completed_date = match status {
                    ServiceOrderStatus::Completed => {
                        Some(shift_date(scheduled_date, self.rng.gen_range(0i64..3)))
                    }
                    _ => None,
                };
                let part_count: usize = self.rng.gen_range(1..=4);
                let mut parts_used = Vec::with_capacity(part_count);
                for _ in 0..part_count {
                    if let Some(item) = inventory.choose(&mut self.rng) {
                        parts_used.push(PartUsage {
                            item_id: item.item_id.clone(),
                            name: item.name.clone(),
                            quantity: self.rng.gen_range(1..=3),
                            unit_price: item.selling_price,
                            buying_price: item.buying_price,
                        });
                    }
                }
                let labor_hours = self.rng.gen_range(1..=8) as f64;
                let labor_rate = DEFAULT_LABOR_RATE;
                let travel_cost = round2(self.rng.gen_range(500.0..3_000.0));
                let other_costs = round2(self.rng.gen_range(0.0..1_500.0));
                let parts_cost: f64 = parts_used
                    .iter()
                    .map(|part| part.quantity as f64 * part.buying_price)
                    .sum();
                let total_cost =
                    parts_cost + labor_hours * labor_rate + travel_cost + other_costs;
                let invoice_amount = round2(total_cost * self.rng.gen_range(0.8..1.6));
                ServiceOrderRecord {
                    order_id: format!("SO-{}", 1000 + index),
                    title: format!("{} - {}", order_title(service_type), site_name),
                    site_id,
                    site_name,
                    county,
                    service_type,
                    status,
                    priority: self.pick(&[
                        ServiceOrderPriority::Low,
                        ServiceOrderPriority::Medium,
                        ServiceOrderPriority::High,
                        ServiceOrderPriority::Critical,
                    ]),
                    scheduled_date,
                    completed_date,
                    technician_id,
                    technician_name,
                    description: order_description(service_type),
                    parts_used,
                    labor_hours,
                    labor_rate,
                    travel_cost,
                    other_costs,
                    invoice_amount,
                }
            })
            .collect()
    }

    fn tasks(&mut self, project_id: &str) -> Vec<TaskRecord> {
        let count: usize = self.rng.gen_range(3..=8);
        // 首任务从基准日前 30-60 天起，后续任务顺次衔接
        let mut cursor = shift_date(self.today, -(30 + self.rng.gen_range(0i64..30)));
        (0..count)
            .map(|index| {
                let task_id = format!("{}-T{}", project_id, index + 1);
                let status = self.pick(&[
                    TaskStatus::Completed,
                    TaskStatus::InProgress,
                    TaskStatus::Planned,
                    TaskStatus::OnHold,
                    TaskStatus::Delayed,
                ]);
                let progress: u8 = match status {
                    TaskStatus::Completed => 100,
                    TaskStatus::InProgress => self.rng.gen_range(20..80),
                    TaskStatus::Planned => 0,
                    TaskStatus::OnHold => self.rng.gen_range(10..50),
                    TaskStatus::Delayed => self.rng.gen_range(5..25),
                };
                let duration = self.rng.gen_range(3..=16) as u64;
                let start_date = if index == 0 {
                    cursor
                } else {
                    cursor + Days::new(self.rng.gen_range(1..=3) as u64)
                };
                let end_date = start_date + Days::new(duration);
                cursor = end_date;
                let milestones = self.task_milestones(&task_id, start_date, duration);
                TaskRecord {
                    task_id,
                    name: TASK_NAMES[index % TASK_NAMES.len()].to_string(),
                    start_date,
                    end_date,
                    progress,
                    status,
                    assignee: None,
                    milestones,
                }
            })
            .collect()
    }

    fn task_milestones(
        &mut self,
        task_id: &str,
        start_date: NaiveDate,
        duration: u64,
    ) -> Vec<TaskMilestone> {
        let count: usize = self.rng.gen_range(0..=2);
        (0..count)
            .map(|index| {
                let date =
                    start_date + Days::new(duration * (index as u64 + 1) / (count as u64 + 1));
                TaskMilestone {
                    milestone_id: format!("{}-M{}", task_id, index + 1),
                    name: if index == 0 {
                        "Start".to_string()
                    } else if index == count - 1 {
                        "Finish".to_string()
                    } else {
                        "Checkpoint".to_string()
                    },
                    date,
                    // 展示性标记：生成时刻早于基准日即视为完成
                    completed: date < self.today,
                }
            })
            .collect()
    }

    fn project_milestones(&mut self) -> Vec<MilestoneRecord> {
        let count: usize = self.rng.gen_range(3..=5);
        (0..count)
            .map(|index| {
                let (title, description) = MILESTONE_TEMPLATES[index % MILESTONE_TEMPLATES.len()];
                let due_date = shift_date(
                    self.today,
                    (index as i64) * 14 + self.rng.gen_range(0i64..10),
                );
                let status = match index {
                    0 => MilestoneStatus::Completed,
                    1 => MilestoneStatus::InProgress,
                    2 => {
                        if self.rng.gen_bool(0.5) {
                            MilestoneStatus::Pending
                        } else {
                            MilestoneStatus::Delayed
                        }
                    }
                    _ => MilestoneStatus::Pending,
                };
                let completed_date = match status {
                    MilestoneStatus::Completed => Some(self.date_before(due_date, 10)),
                    _ => None,
                };
                MilestoneRecord {
                    milestone_id: format!("MS-{}", index + 1),
                    title: title.to_string(),
                    description: description.to_string(),
                    due_date,
                    completed_date,
                    status,
                }
            })
            .collect()
    }

    fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.rng.gen_range(0..items.len())]
    }

    fn pick_names(
        &mut self,
        pool_size: usize,
        count: usize,
        name_at: impl Fn(usize) -> String,
    ) -> Vec<String> {
        if pool_size == 0 {
            return Vec::new();
        }
        let mut names = Vec::new();
        for _ in 0..count {
            let name = name_at(self.rng.gen_range(0..pool_size));
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    fn person_name(&mut self) -> String {
        format!("{} {}", self.pick(&FIRST_NAMES), self.pick(&LAST_NAMES))
    }

    fn phone(&mut self) -> String {
        format!("+254 7{:08}", self.rng.gen_range(0..100_000_000))
    }

    fn past_date(&mut self, max_days_back: i64) -> NaiveDate {
        let back = self.rng.gen_range(0..max_days_back.max(1));
        shift_date(self.today, -back)
    }

    fn date_before(&mut self, date: NaiveDate, max_days_back: i64) -> NaiveDate {
        let back = self.rng.gen_range(0..max_days_back.max(1));
        shift_date(date, -back)
    }

    fn past_instant_ms(&mut self, max_days_back: i64) -> i64 {
        let midnight = self
            .today
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis())
            .unwrap_or_default();
        midnight - self.rng.gen_range(0..max_days_back.max(1) * 24 * 60 * 60 * 1000)
    }
}

/// 固定的十件光伏物料目录（价格为 KSH）。
pub fn inventory_catalog() -> Vec<InventoryItemRecord> {
    let restocked = |y: i32, m: u32, d: u32| {
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
    };
    let item = |item_id: &str,
                name: &str,
                category: &str,
                selling_price: f64,
                buying_price: f64,
                quantity: i64,
                min_quantity: i64,
                location: &str,
                supplier: &str,
                last_restocked: NaiveDate| InventoryItemRecord {
        item_id: item_id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        selling_price,
        buying_price,
        quantity,
        min_quantity,
        location: location.to_string(),
        supplier: supplier.to_string(),
        last_restocked,
    };
    vec![
        item(
            "INV-1001",
            "Solar Panel 250W",
            "Solar Panels",
            15_000.0,
            12_000.0,
            25,
            10,
            "Warehouse A",
            "SolarTech Ltd",
            restocked(2025, 2, 15),
        ),
        item(
            "INV-1002",
            "Inverter 3kW",
            "Inverters",
            45_000.0,
            38_000.0,
            12,
            5,
            "Warehouse A",
            "PowerSolutions Inc",
            restocked(2025, 2, 10),
        ),
        item(
            "INV-1003",
            "Battery 12V 200Ah",
            "Batteries",
            32_000.0,
            26_000.0,
            18,
            8,
            "Warehouse B",
            "BatteryPlus",
            restocked(2025, 2, 20),
        ),
        item(
            "INV-1004",
            "Mounting Bracket",
            "Mounting Systems",
            4_500.0,
            3_200.0,
            40,
            15,
            "Warehouse A",
            "MetalWorks Ltd",
            restocked(2025, 1, 30),
        ),
        item(
            "INV-1005",
            "Solar Cable 10m",
            "Cables & Wiring",
            2_500.0,
            1_800.0,
            60,
            20,
            "Warehouse C",
            "ElectroCables",
            restocked(2025, 2, 5),
        ),
        item(
            "INV-1006",
            "MC4 Connector Pair",
            "Connectors",
            800.0,
            500.0,
            100,
            50,
            "Warehouse C",
            "ConnectTech",
            restocked(2025, 1, 25),
        ),
        item(
            "INV-1007",
            "Charge Controller 30A",
            "Controllers",
            12_000.0,
            9_500.0,
            15,
            8,
            "Warehouse B",
            "PowerSolutions Inc",
            restocked(2025, 2, 12),
        ),
        item(
            "INV-1008",
            "Junction Box",
            "Accessories",
            3_500.0,
            2_500.0,
            30,
            15,
            "Warehouse A",
            "ElectroCables",
            restocked(2025, 1, 20),
        ),
        item(
            "INV-1009",
            "Fuse 15A",
            "Accessories",
            500.0,
            300.0,
            50,
            25,
            "Warehouse C",
            "ElectroCables",
            restocked(2025, 2, 1),
        ),
        item(
            "INV-1010",
            "Grounding Kit",
            "Installation",
            6_000.0,
            4_500.0,
            20,
            10,
            "Warehouse B",
            "SafetyFirst",
            restocked(2025, 1, 15),
        ),
    ]
}

fn order_title(service_type: ServiceType) -> &'static str {
    match service_type {
        ServiceType::Installation => "Initial Installation",
        ServiceType::Maintenance => "Quarterly Maintenance",
        ServiceType::Repair => "Inverter Repair",
        ServiceType::Inspection => "Annual Inspection",
    }
}

fn order_description(service_type: ServiceType) -> String {
    match service_type {
        ServiceType::Installation => "Full installation of the solar system.".to_string(),
        ServiceType::Maintenance => {
            "Quarterly maintenance service for solar installation.".to_string()
        }
        ServiceType::Repair => "Diagnose and repair reported equipment fault.".to_string(),
        ServiceType::Inspection => "Annual compliance and safety inspection.".to_string(),
    }
}

fn shift_date(date: NaiveDate, days: i64) -> NaiveDate {
    if days >= 0 {
        date + Days::new(days as u64)
    } else {
        date - Days::new(days.unsigned_abs())
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
