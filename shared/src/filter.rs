//! Client-side filtering over rows already loaded into the page.

use crate::models::{Business, CaseStatus, Customer, Machine, MachineStatus, SupportCase, VerificationStatus};

/// Case-insensitive substring match. A blank query matches everything.
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
}

pub fn filter_machines<'a>(
    machines: &'a [Machine],
    query: &str,
    status: Option<MachineStatus>,
) -> Vec<&'a Machine> {
    machines
        .iter()
        .filter(|m| status.map_or(true, |s| m.status == s))
        .filter(|m| matches_query(query, &[m.id.as_str(), m.location.as_str()]))
        .collect()
}

pub fn filter_cases<'a>(
    cases: &'a [SupportCase],
    query: &str,
    status: Option<CaseStatus>,
) -> Vec<&'a SupportCase> {
    cases
        .iter()
        .filter(|c| status.map_or(true, |s| c.status == s))
        .filter(|c| matches_query(query, &[c.case_number.as_str(), c.subject.as_str()]))
        .collect()
}

/// Totals shown above the customer and business tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerificationCounts {
    pub total: usize,
    pub approved: usize,
    pub pending: usize,
    pub rejected: usize,
}

impl VerificationCounts {
    pub fn tally(statuses: impl IntoIterator<Item = VerificationStatus>) -> Self {
        statuses
            .into_iter()
            .fold(Self::default(), |mut counts, status| {
                counts.total += 1;
                match status {
                    VerificationStatus::Approved => counts.approved += 1,
                    VerificationStatus::Pending => counts.pending += 1,
                    VerificationStatus::Rejected => counts.rejected += 1,
                }
                counts
            })
    }

    pub fn for_customers(customers: &[Customer]) -> Self {
        Self::tally(customers.iter().map(|c| c.kyc_status))
    }

    pub fn for_businesses(businesses: &[Business]) -> Self {
        Self::tally(businesses.iter().map(|b| b.kyb_status))
    }
}
