use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::RoleAssignment;

/// Privilege tier assigned to a dashboard user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Dev,
    User,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::User, Role::Dev, Role::Admin];

    /// Value stored in the `user_roles` table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Dev => "dev",
            Role::User => "user",
        }
    }

    /// Human-readable label for badges and the sidebar.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Dev => "Developer",
            Role::User => "User",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "dev" => Ok(Role::Dev),
            "user" => Ok(Role::User),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// Authenticated identity as reported by the auth service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: Uuid,
    #[serde(default)]
    pub email: String,
}

impl UserIdentity {
    pub fn new(id: Uuid, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }
}

// ============================================================================
// Fleet
// ============================================================================

/// Connection state reported by an RPT machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MachineStatus {
    Connected,
    Transmitting,
    Error,
    Offline,
}

impl MachineStatus {
    pub const ALL: [MachineStatus; 4] = [
        MachineStatus::Connected,
        MachineStatus::Transmitting,
        MachineStatus::Error,
        MachineStatus::Offline,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MachineStatus::Connected => "Connected",
            MachineStatus::Transmitting => "Transmitting",
            MachineStatus::Error => "Error",
            MachineStatus::Offline => "Offline",
        }
    }
}

/// RPT cash deposit machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    pub id: String,
    pub location: String,
    pub status: MachineStatus,
    pub last_ping: String,
    pub transactions: u32,
    /// Balance held in the machine, in cents
    pub balance_cents: u64,
}

impl Machine {
    /// Balance as whole dollars with thousands separators, e.g. `$12,450`.
    pub fn balance_display(&self) -> String {
        let dollars = (self.balance_cents / 100).to_string();
        let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
        for (i, ch) in dollars.chars().enumerate() {
            if i > 0 && (dollars.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        format!("${}", grouped)
    }
}

/// Headline number shown in a stat card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetStat {
    pub label: String,
    pub value: String,
    pub description: Option<String>,
    pub trend: Option<String>,
}

/// Status update shown on the overview page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineActivity {
    pub machine_id: String,
    pub status: MachineStatus,
    pub time: String,
}

// ============================================================================
// Support
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CasePriority {
    Low,
    Medium,
    High,
}

impl CasePriority {
    pub fn label(&self) -> &'static str {
        match self {
            CasePriority::Low => "Low",
            CasePriority::Medium => "Medium",
            CasePriority::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Open,
    InProgress,
    Closed,
}

impl CaseStatus {
    pub const ALL: [CaseStatus; 3] = [CaseStatus::Open, CaseStatus::InProgress, CaseStatus::Closed];

    pub fn label(&self) -> &'static str {
        match self {
            CaseStatus::Open => "Open",
            CaseStatus::InProgress => "In Progress",
            CaseStatus::Closed => "Closed",
        }
    }
}

/// Customer support case (`support_cases` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportCase {
    pub id: Uuid,
    pub case_number: String,
    pub subject: String,
    pub description: Option<String>,
    pub priority: CasePriority,
    pub status: CaseStatus,
    pub machine_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Support ticket summary shown on the overview page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseActivity {
    pub case_number: String,
    pub subject: String,
    pub priority: CasePriority,
    pub time: String,
}

// ============================================================================
// Customers and businesses
// ============================================================================

/// KYC / KYB review outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Pending,
    Approved,
    Rejected,
}

impl VerificationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VerificationStatus::Pending => "Pending",
            VerificationStatus::Approved => "Approved",
            VerificationStatus::Rejected => "Rejected",
        }
    }
}

/// Retail customer (`customers` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub kyc_status: VerificationStatus,
    pub kyc_verified_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Business account (`businesses` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub registration_number: Option<String>,
    pub kyb_status: VerificationStatus,
    pub kyb_verified_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Dashboard users
// ============================================================================

/// Dashboard user profile (`profiles` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Profile joined with its role assignment
#[derive(Debug, Clone, PartialEq)]
pub struct UserRow {
    pub profile: UserProfile,
    pub role: Role,
}

impl UserRow {
    /// Pairs each profile with its assigned role. Profiles without an
    /// assignment get [`Role::User`].
    pub fn join(profiles: Vec<UserProfile>, assignments: &[RoleAssignment]) -> Vec<UserRow> {
        profiles
            .into_iter()
            .map(|profile| {
                let role = assignments
                    .iter()
                    .find(|a| a.user_id == profile.id)
                    .map(|a| a.role)
                    .unwrap_or(Role::User);
                UserRow { profile, role }
            })
            .collect()
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.profile.first_name, self.profile.last_name)
            .trim()
            .to_string()
    }
}
