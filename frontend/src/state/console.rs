//! Console state and its transitions.
//!
//! Every external event (a request finishing, a form being submitted, a
//! timer firing) is a method on [`ConsoleState`]. Methods mutate the state
//! synchronously and return the [`Followup`] effects the caller must run.

use chrono::NaiveDate;

use crate::api::{
    AttendanceFilter, AttendanceListing, AttendanceRecord, AttendanceSummary, CreateAttendance,
    CreateEmployee, DashboardSnapshot, Employee,
};
use crate::state::forms::{AttendanceDraft, EmployeeDraft, FilterDraft};
use crate::state::toast::{ToastState, ToastTicket};

pub const MSG_EMPLOYEES_FAILED: &str = "Unable to fetch employees.";
pub const MSG_DASHBOARD_FAILED: &str = "Unable to fetch dashboard data.";
pub const MSG_ATTENDANCE_FAILED: &str = "Unable to fetch attendance.";
pub const MSG_CREATE_EMPLOYEE_FAILED: &str = "Unable to add employee.";
pub const MSG_DELETE_EMPLOYEE_FAILED: &str = "Unable to delete employee.";
pub const MSG_SAVE_ATTENDANCE_FAILED: &str = "Unable to save attendance.";

pub const MSG_EMPLOYEE_ADDED: &str = "Employee added successfully.";
pub const MSG_EMPLOYEE_DELETED: &str = "Employee deleted.";
pub const MSG_ATTENDANCE_SAVED: &str = "Attendance saved.";
pub const MSG_SELECT_EMPLOYEE_FIRST: &str = "Select an employee first.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Followup {
    LoadAttendance {
        employee_id: String,
        filter: AttendanceFilter,
    },
    RefreshDashboard,
    Notify(String),
}

/// Outcome of starting a submission: either a request to send or the
/// effects of refusing it locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission<T> {
    Send(T),
    Skip(Vec<Followup>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleState {
    pub employees: Vec<Employee>,
    pub employees_loading: bool,
    pub employees_error: Option<String>,
    pub selected_employee_id: String,

    pub dashboard: Option<DashboardSnapshot>,
    pub dashboard_loading: bool,

    pub attendance: Vec<AttendanceRecord>,
    pub attendance_summary: Option<AttendanceSummary>,
    pub attendance_loading: bool,
    pub attendance_employee: Option<Employee>,

    pub toast: ToastState,
    pub show_employee_modal: bool,

    pub employee_form: EmployeeDraft,
    pub employee_submitting: bool,
    pub attendance_form: AttendanceDraft,
    pub attendance_submitting: bool,
    pub attendance_filter: FilterDraft,

    pub pending_delete: Option<String>,
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self::new(crate::utils::time::today_local())
    }
}

impl ConsoleState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            employees: Vec::new(),
            employees_loading: true,
            employees_error: None,
            selected_employee_id: String::new(),
            dashboard: None,
            dashboard_loading: true,
            attendance: Vec::new(),
            attendance_summary: None,
            attendance_loading: false,
            attendance_employee: None,
            toast: ToastState::default(),
            show_employee_modal: false,
            employee_form: EmployeeDraft::default(),
            employee_submitting: false,
            attendance_form: AttendanceDraft::for_day(today),
            attendance_submitting: false,
            attendance_filter: FilterDraft::default(),
            pending_delete: None,
        }
    }

    pub fn selected_employee(&self) -> Option<&Employee> {
        self.find_employee(&self.selected_employee_id)
    }

    /// The employee shown in the detail modal.
    pub fn employee_details(&self) -> Option<&Employee> {
        self.attendance_employee
            .as_ref()
            .or_else(|| self.selected_employee())
    }

    pub fn find_employee(&self, employee_id: &str) -> Option<&Employee> {
        if employee_id.is_empty() {
            return None;
        }
        self.employees
            .iter()
            .find(|employee| employee.employee_id == employee_id)
    }

    fn current_filter(&self) -> AttendanceFilter {
        self.attendance_filter.lenient()
    }

    fn first_employee_id(&self) -> String {
        self.employees
            .first()
            .map(|employee| employee.employee_id.clone())
            .unwrap_or_default()
    }

    /// Changing to a non-empty id triggers an attendance load.
    fn set_selection(&mut self, employee_id: String) -> Vec<Followup> {
        if self.selected_employee_id == employee_id {
            return Vec::new();
        }
        self.selected_employee_id = employee_id;
        if self.selected_employee_id.is_empty() {
            return Vec::new();
        }
        vec![Followup::LoadAttendance {
            employee_id: self.selected_employee_id.clone(),
            filter: self.current_filter(),
        }]
    }

    // Employees

    pub fn begin_employees_load(&mut self) {
        self.employees_loading = true;
        self.employees_error = None;
    }

    pub fn employees_loaded(&mut self, employees: Vec<Employee>) -> Vec<Followup> {
        self.employees = employees;
        self.employees_loading = false;
        self.employees_error = None;

        let keep = !self.selected_employee_id.is_empty()
            && self.find_employee(&self.selected_employee_id).is_some();
        if keep {
            Vec::new()
        } else {
            let next = self.first_employee_id();
            self.set_selection(next)
        }
    }

    pub fn employees_failed(&mut self, message: String) -> Vec<Followup> {
        self.employees_loading = false;
        self.employees_error = Some(message.clone());
        vec![Followup::Notify(message)]
    }

    // Dashboard

    pub fn begin_dashboard_load(&mut self) {
        self.dashboard_loading = true;
    }

    pub fn dashboard_loaded(&mut self, snapshot: DashboardSnapshot) {
        self.dashboard = Some(snapshot);
        self.dashboard_loading = false;
    }

    pub fn dashboard_failed(&mut self, message: String) -> Vec<Followup> {
        self.dashboard_loading = false;
        vec![Followup::Notify(message)]
    }

    // Attendance view

    pub fn begin_attendance_load(&mut self) {
        self.attendance_loading = true;
    }

    pub fn attendance_loaded(&mut self, listing: AttendanceListing) {
        self.attendance = listing.attendance;
        self.attendance_summary = listing.summary;
        self.attendance_employee = listing.employee;
        self.attendance_loading = false;
    }

    pub fn attendance_failed(&mut self, message: String) -> Vec<Followup> {
        self.clear_attendance();
        self.attendance_loading = false;
        vec![Followup::Notify(message)]
    }

    fn clear_attendance(&mut self) {
        self.attendance.clear();
        self.attendance_summary = None;
        self.attendance_employee = None;
    }

    // New employee form

    pub fn begin_employee_submit(&mut self) -> Submission<CreateEmployee> {
        if self.employee_submitting {
            return Submission::Skip(Vec::new());
        }
        match self.employee_form.to_request() {
            Ok(request) => {
                self.employee_submitting = true;
                Submission::Send(request)
            }
            Err(message) => Submission::Skip(vec![Followup::Notify(message.to_string())]),
        }
    }

    /// Inserts `created` keeping the list ordered by `employee_id` bytes, so
    /// upper-case ids sort before lower-case ones.
    pub fn employee_created(&mut self, created: Employee) -> Vec<Followup> {
        self.employee_submitting = false;
        self.employee_form = EmployeeDraft::default();

        let employee_id = created.employee_id.clone();
        self.employees.push(created);
        self.employees
            .sort_by(|a, b| a.employee_id.cmp(&b.employee_id));

        let mut followups = self.set_selection(employee_id);
        followups.push(Followup::RefreshDashboard);
        followups.push(Followup::Notify(MSG_EMPLOYEE_ADDED.to_string()));
        followups
    }

    pub fn employee_create_failed(&mut self, message: String) -> Vec<Followup> {
        self.employee_submitting = false;
        vec![Followup::Notify(message)]
    }

    // Delete confirmation

    pub fn request_delete(&mut self, employee_id: impl Into<String>) {
        self.pending_delete = Some(employee_id.into());
    }

    pub fn delete_prompt(&self) -> Option<String> {
        let employee_id = self.pending_delete.as_deref()?;
        let name = self
            .find_employee(employee_id)
            .map(|employee| employee.full_name.as_str())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(employee_id);
        Some(format!("Delete employee {}?", name))
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Takes the confirmed id; the caller issues the delete request.
    pub fn confirm_delete(&mut self) -> Option<String> {
        self.pending_delete.take()
    }

    pub fn employee_deleted(&mut self, employee_id: &str) -> Vec<Followup> {
        self.employees
            .retain(|employee| employee.employee_id != employee_id);

        let mut followups = Vec::new();
        if self.selected_employee_id == employee_id {
            self.clear_attendance();
            self.show_employee_modal = false;
            let next = self.first_employee_id();
            followups.extend(self.set_selection(next));
        }
        followups.push(Followup::RefreshDashboard);
        followups.push(Followup::Notify(MSG_EMPLOYEE_DELETED.to_string()));
        followups
    }

    pub fn employee_delete_failed(&mut self, message: String) -> Vec<Followup> {
        vec![Followup::Notify(message)]
    }

    // Attendance form

    pub fn begin_attendance_submit(&mut self) -> Submission<(String, CreateAttendance)> {
        if self.attendance_submitting {
            return Submission::Skip(Vec::new());
        }
        if self.selected_employee_id.is_empty() {
            return Submission::Skip(vec![Followup::Notify(
                MSG_SELECT_EMPLOYEE_FIRST.to_string(),
            )]);
        }
        match self.attendance_form.to_request() {
            Ok(request) => {
                self.attendance_submitting = true;
                Submission::Send((self.selected_employee_id.clone(), request))
            }
            Err(message) => Submission::Skip(vec![Followup::Notify(message.to_string())]),
        }
    }

    /// The form keeps its values after a save.
    pub fn attendance_saved(&mut self, employee_id: &str) -> Vec<Followup> {
        self.attendance_submitting = false;
        vec![
            Followup::Notify(MSG_ATTENDANCE_SAVED.to_string()),
            Followup::LoadAttendance {
                employee_id: employee_id.to_string(),
                filter: self.current_filter(),
            },
            Followup::RefreshDashboard,
        ]
    }

    pub fn attendance_save_failed(&mut self, message: String) -> Vec<Followup> {
        self.attendance_submitting = false;
        vec![Followup::Notify(message)]
    }

    // Filter

    pub fn set_filter_from(&mut self, value: impl Into<String>) {
        self.attendance_filter.from = value.into();
    }

    pub fn set_filter_to(&mut self, value: impl Into<String>) {
        self.attendance_filter.to = value.into();
    }

    pub fn apply_filter(&mut self) -> Vec<Followup> {
        if self.selected_employee_id.is_empty() {
            return Vec::new();
        }
        match self.attendance_filter.to_filter() {
            Ok(filter) => vec![Followup::LoadAttendance {
                employee_id: self.selected_employee_id.clone(),
                filter,
            }],
            Err(message) => vec![Followup::Notify(message.to_string())],
        }
    }

    pub fn refresh_attendance(&self) -> Vec<Followup> {
        if self.selected_employee_id.is_empty() {
            return Vec::new();
        }
        vec![Followup::LoadAttendance {
            employee_id: self.selected_employee_id.clone(),
            filter: self.current_filter(),
        }]
    }

    // Selection and modal

    pub fn select_employee(&mut self, employee_id: impl Into<String>) -> Vec<Followup> {
        self.set_selection(employee_id.into())
    }

    pub fn view_employee(&mut self, employee: Employee) -> Vec<Followup> {
        let employee_id = employee.employee_id.clone();
        self.attendance_employee = Some(employee);
        self.show_employee_modal = true;
        self.set_selection(employee_id)
    }

    pub fn close_employee_modal(&mut self) {
        self.show_employee_modal = false;
    }

    // Toast

    pub fn notify(&mut self, message: impl Into<String>) -> ToastTicket {
        self.toast.show(message)
    }

    pub fn expire_toast(&mut self, ticket: ToastTicket) -> bool {
        self.toast.expire(ticket)
    }
}
