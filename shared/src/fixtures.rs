//! Static fleet data shown until machines report through the backend.

use crate::models::{CaseActivity, CasePriority, FleetStat, Machine, MachineActivity, MachineStatus};

fn stat(label: &str, value: &str, description: Option<&str>, trend: Option<&str>) -> FleetStat {
    FleetStat {
        label: label.to_string(),
        value: value.to_string(),
        description: description.map(str::to_string),
        trend: trend.map(str::to_string),
    }
}

fn machine(
    id: &str,
    location: &str,
    status: MachineStatus,
    last_ping: &str,
    transactions: u32,
    balance_dollars: u64,
) -> Machine {
    Machine {
        id: id.to_string(),
        location: location.to_string(),
        status,
        last_ping: last_ping.to_string(),
        transactions,
        balance_cents: balance_dollars * 100,
    }
}

pub fn overview_stats() -> Vec<FleetStat> {
    vec![
        stat("Total Machines", "156", Some("Active RPT machines"), Some("+12 from last month")),
        stat("Machines Online", "142", Some("Currently connected"), Some("91% uptime")),
        stat("In Error Mode", "8", Some("Requiring attention"), Some("5% of fleet")),
        stat("Open Cases", "23", Some("Customer support tickets"), Some("-5 from yesterday")),
    ]
}

pub fn fleet_stats() -> Vec<FleetStat> {
    vec![
        stat("Total Machines", "156", None, None),
        stat("Online", "142", None, None),
        stat("Error Mode", "8", None, None),
        stat("Offline", "6", None, None),
        stat("Total Transactions Today", "2,847", None, None),
        stat("Total Balance", "$428,750", None, None),
    ]
}

pub fn machines() -> Vec<Machine> {
    use MachineStatus::*;

    vec![
        machine("RPT-001", "Main Street Branch", Connected, "2 min ago", 45, 12_450),
        machine("RPT-002", "Downtown Plaza", Connected, "5 min ago", 38, 9_820),
        machine("RPT-003", "North Station", Error, "15 min ago", 12, 3_200),
        machine("RPT-004", "Airport Terminal", Connected, "1 min ago", 67, 18_900),
        machine("RPT-005", "Shopping Mall", Offline, "2 hours ago", 0, 0),
        machine("RPT-006", "Central Park", Connected, "3 min ago", 29, 7_650),
        machine("RPT-007", "University Campus", Transmitting, "1 min ago", 54, 15_300),
        machine("RPT-008", "Beach Boardwalk", Error, "30 min ago", 8, 2_100),
    ]
}

pub fn recent_machine_activity() -> Vec<MachineActivity> {
    [
        ("RPT-001", MachineStatus::Connected, "2 min ago"),
        ("RPT-042", MachineStatus::Error, "15 min ago"),
        ("RPT-089", MachineStatus::Offline, "1 hour ago"),
        ("RPT-123", MachineStatus::Connected, "2 hours ago"),
    ]
    .into_iter()
    .map(|(id, status, time)| MachineActivity {
        machine_id: id.to_string(),
        status,
        time: time.to_string(),
    })
    .collect()
}

pub fn recent_cases() -> Vec<CaseActivity> {
    [
        ("CS-1045", "Transaction failed", CasePriority::High, "10 min ago"),
        ("CS-1044", "Card reader issue", CasePriority::Medium, "45 min ago"),
        ("CS-1043", "Balance inquiry", CasePriority::Low, "2 hours ago"),
        ("CS-1042", "Receipt not printed", CasePriority::Medium, "3 hours ago"),
    ]
    .into_iter()
    .map(|(number, subject, priority, time)| CaseActivity {
        case_number: number.to_string(),
        subject: subject.to_string(),
        priority,
        time: time.to_string(),
    })
    .collect()
}
