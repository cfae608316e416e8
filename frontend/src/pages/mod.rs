pub mod businesses;
pub mod customers;
pub mod login;
pub mod machines;
pub mod not_found;
pub mod overview;
pub mod settings;
pub mod support;
pub mod support_case;
pub mod users;

use chrono::{DateTime, Utc};
use shared::filter::VerificationCounts;
use shared::models::FleetStat;

/// Stat cards for a customer or business list, e.g. `KYC Approved`.
pub(crate) fn verification_stats(total_label: &str, check: &str, counts: VerificationCounts) -> Vec<FleetStat> {
    [
        (total_label.to_string(), counts.total),
        (format!("{} Approved", check), counts.approved),
        (format!("{} Pending", check), counts.pending),
        (format!("{} Rejected", check), counts.rejected),
    ]
    .into_iter()
    .map(|(label, value)| FleetStat {
        label,
        value: value.to_string(),
        description: None,
        trend: None,
    })
    .collect()
}

pub(crate) fn format_date(date: Option<&DateTime<Utc>>) -> String {
    date.map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_verification_stats_labels() {
        let stats = verification_stats(
            "Total Customers",
            "KYC",
            VerificationCounts {
                total: 3,
                approved: 1,
                pending: 2,
                rejected: 0,
            },
        );
        let labels: Vec<&str> = stats.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Total Customers", "KYC Approved", "KYC Pending", "KYC Rejected"]
        );
        assert_eq!(stats[2].value, "2");
    }

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
        assert_eq!(format_date(Some(&date)), "Mar 9, 2024");
        assert_eq!(format_date(None), "N/A");
    }
}
