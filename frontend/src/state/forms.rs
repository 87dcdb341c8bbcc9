use chrono::NaiveDate;

use crate::api::{AttendanceFilter, AttendanceStatus, CreateAttendance, CreateEmployee};

pub const MSG_EMPLOYEE_FIELDS_REQUIRED: &str = "All employee fields are required.";
pub const MSG_INVALID_ATTENDANCE_DATE: &str = "Choose a valid attendance date.";
pub const MSG_INVALID_FILTER_DATE: &str = "Enter filter dates as YYYY-MM-DD.";
pub const MSG_FILTER_RANGE: &str = "From date must be on or before To date.";

/// Parses the value of an `<input type="date">`. Blank means "no date".
pub fn parse_input_date(value: &str) -> Result<Option<NaiveDate>, chrono::ParseError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map(Some)
}

pub fn format_input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeField {
    EmployeeId,
    FullName,
    Email,
    Department,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 4] = [
        EmployeeField::EmployeeId,
        EmployeeField::FullName,
        EmployeeField::Email,
        EmployeeField::Department,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EmployeeField::EmployeeId => "employee_id",
            EmployeeField::FullName => "full_name",
            EmployeeField::Email => "email",
            EmployeeField::Department => "department",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmployeeField::EmployeeId => "Employee ID",
            EmployeeField::FullName => "Full Name",
            EmployeeField::Email => "Email",
            EmployeeField::Department => "Department",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            EmployeeField::EmployeeId => "EMP-1001",
            EmployeeField::FullName => "Name",
            EmployeeField::Email => "abc@example.com",
            EmployeeField::Department => "Engineering",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            EmployeeField::Email => "email",
            _ => "text",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl EmployeeDraft {
    pub fn get(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::EmployeeId => &self.employee_id,
            EmployeeField::FullName => &self.full_name,
            EmployeeField::Email => &self.email,
            EmployeeField::Department => &self.department,
        }
    }

    pub fn set(&mut self, field: EmployeeField, value: String) {
        match field {
            EmployeeField::EmployeeId => self.employee_id = value,
            EmployeeField::FullName => self.full_name = value,
            EmployeeField::Email => self.email = value,
            EmployeeField::Department => self.department = value,
        }
    }

    /// Trims every field and lower-cases the email.
    pub fn to_request(&self) -> Result<CreateEmployee, &'static str> {
        let request = CreateEmployee {
            employee_id: self.employee_id.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            department: self.department.trim().to_string(),
        };
        let blank = [
            &request.employee_id,
            &request.full_name,
            &request.email,
            &request.department,
        ]
        .iter()
        .any(|field| field.is_empty());
        if blank {
            Err(MSG_EMPLOYEE_FIELDS_REQUIRED)
        } else {
            Ok(request)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceDraft {
    pub date: String,
    pub status: AttendanceStatus,
}

impl AttendanceDraft {
    pub fn for_day(day: NaiveDate) -> Self {
        Self {
            date: format_input_date(day),
            status: AttendanceStatus::Present,
        }
    }

    pub fn to_request(&self) -> Result<CreateAttendance, &'static str> {
        match parse_input_date(&self.date) {
            Ok(Some(date)) => Ok(CreateAttendance {
                date,
                status: self.status,
            }),
            _ => Err(MSG_INVALID_ATTENDANCE_DATE),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterDraft {
    pub from: String,
    pub to: String,
}

impl FilterDraft {
    /// Strict conversion used by "Apply".
    pub fn to_filter(&self) -> Result<AttendanceFilter, &'static str> {
        let from = parse_input_date(&self.from).map_err(|_| MSG_INVALID_FILTER_DATE)?;
        let to = parse_input_date(&self.to).map_err(|_| MSG_INVALID_FILTER_DATE)?;
        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(MSG_FILTER_RANGE);
            }
        }
        Ok(AttendanceFilter::new(from, to))
    }

    /// Unparseable bounds are dropped rather than rejected.
    pub fn lenient(&self) -> AttendanceFilter {
        AttendanceFilter::new(
            parse_input_date(&self.from).ok().flatten(),
            parse_input_date(&self.to).ok().flatten(),
        )
    }
}
