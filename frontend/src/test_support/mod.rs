#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{AttendanceRecord, AttendanceStatus, Employee};
    use chrono::NaiveDate;

    pub fn employee(employee_id: &str, full_name: &str) -> Employee {
        Employee {
            id: Some(employee_id.to_lowercase()),
            employee_id: employee_id.into(),
            full_name: full_name.into(),
            email: format!("{}@example.com", employee_id.to_lowercase()),
            department: "Engineering".into(),
            created_at: None,
        }
    }

    pub fn record(id: &str, day: u32, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id: id.into(),
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            status,
        }
    }
}
