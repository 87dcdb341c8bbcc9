use crate::api::{AttendanceStatus, AttendanceSummary, DashboardSnapshot, Employee};
use chrono::DateTime;

pub fn display_or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

pub fn employee_option_label(employee: &Employee) -> String {
    format!("{} ({})", employee.full_name, employee.employee_id)
}

/// RFC 3339 timestamps are shortened to minutes; anything else is shown as-is.
pub fn format_created_at(value: Option<&str>) -> String {
    match value.map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|parsed| parsed.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|_| raw.to_string()),
        None => "-".to_string(),
    }
}

pub fn status_pill_class(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => {
            "bg-status-success-bg text-status-success-text border border-status-success-border"
        }
        AttendanceStatus::Absent => {
            "bg-status-error-bg text-status-error-text border border-status-error-border"
        }
    }
}

/// Missing snapshot counts as zeros.
pub fn dashboard_stats(snapshot: Option<&DashboardSnapshot>) -> [(&'static str, u64); 4] {
    let snapshot = snapshot.copied().unwrap_or_default();
    [
        ("Employees", snapshot.employees),
        ("Attendance Records", snapshot.attendance_records),
        ("Present Days", snapshot.present_days),
        ("Absent Days", snapshot.absent_days),
    ]
}

pub fn summary_tiles(summary: &AttendanceSummary) -> [(&'static str, u32); 3] {
    [
        ("Present", summary.present_days),
        ("Absent", summary.absent_days),
        ("Total", summary.total_records),
    ]
}
