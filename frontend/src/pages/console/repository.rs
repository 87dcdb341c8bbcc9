use crate::api::{
    ApiClient, ApiError, AttendanceFilter, AttendanceListing, AttendanceRecord, CreateAttendance,
    CreateEmployee, DashboardSnapshot, Employee,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct ConsoleRepository {
    client: Rc<ApiClient>,
}

impl Default for ConsoleRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }

    pub async fn add_employee(&self, payload: CreateEmployee) -> Result<Employee, ApiError> {
        self.client.create_employee(&payload).await
    }

    pub async fn remove_employee(&self, employee_id: &str) -> Result<(), ApiError> {
        self.client.delete_employee(employee_id).await
    }

    pub async fn fetch_attendance(
        &self,
        employee_id: &str,
        filter: AttendanceFilter,
    ) -> Result<AttendanceListing, ApiError> {
        self.client.list_attendance(employee_id, &filter).await
    }

    pub async fn mark_attendance(
        &self,
        employee_id: &str,
        payload: CreateAttendance,
    ) -> Result<AttendanceRecord, ApiError> {
        self.client.create_attendance(employee_id, &payload).await
    }

    pub async fn fetch_dashboard(&self) -> Result<DashboardSnapshot, ApiError> {
        self.client.get_dashboard().await
    }
}
