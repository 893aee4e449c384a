use gp_core::{Category, Priority, ServiceRecord, ServiceStatus};

use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    name: &str,
    description: &str,
    category: Category,
    status: ServiceStatus,
    priority: Priority,
    created_at: NaiveDate,
    updated_at: NaiveDate,
) -> ServiceRecord {
    ServiceRecord {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        status,
        priority,
        created_at,
        updated_at,
        assigned_to: None,
        applicant_name: None,
    }
}

/// The six records every dashboard starts with, in display order.
pub fn seed_catalog() -> Vec<ServiceRecord> {
    vec![
        record(
            "1",
            "Birth Certificate",
            "Apply for a new birth certificate or request a copy",
            Category::IdentityDocuments,
            ServiceStatus::Available,
            Priority::Medium,
            date(2024, 1, 15),
            date(2024, 1, 15),
        ),
        ServiceRecord {
            applicant_name: Some("John Doe".to_string()),
            ..record(
                "2",
                "Marriage Registration",
                "Register your marriage with the government",
                Category::FamilyServices,
                ServiceStatus::Pending,
                Priority::High,
                date(2024, 1, 10),
                date(2024, 1, 12),
            )
        },
        ServiceRecord {
            assigned_to: Some("Officer Smith".to_string()),
            ..record(
                "3",
                "Property Tax Payment",
                "Pay your annual property taxes online",
                Category::TaxServices,
                ServiceStatus::Processing,
                Priority::High,
                date(2024, 1, 8),
                date(2024, 1, 14),
            )
        },
        record(
            "4",
            "Business License",
            "Apply for a new business license or renewal",
            Category::BusinessServices,
            ServiceStatus::Completed,
            Priority::Medium,
            date(2024, 1, 1),
            date(2024, 1, 15),
        ),
        ServiceRecord {
            applicant_name: Some("Jane Smith".to_string()),
            ..record(
                "5",
                "Healthcare Card",
                "Apply for government healthcare coverage",
                Category::Healthcare,
                ServiceStatus::Rejected,
                Priority::High,
                date(2024, 1, 5),
                date(2024, 1, 13),
            )
        },
        record(
            "6",
            "Driver License Renewal",
            "Renew your driver license online",
            Category::Transport,
            ServiceStatus::Available,
            Priority::Low,
            date(2024, 1, 15),
            date(2024, 1, 15),
        ),
    ]
}
