use super::{
    client::{encode_segment, ApiClient},
    types::{ApiError, AttendanceFilter, AttendanceListing, AttendanceRecord, CreateAttendance},
};

impl ApiClient {
    pub async fn list_attendance(
        &self,
        employee_id: &str,
        filter: &AttendanceFilter,
    ) -> Result<AttendanceListing, ApiError> {
        let url = self
            .endpoint(&format!(
                "/employees/{}/attendance/",
                encode_segment(employee_id)
            ))
            .await;
        let mut request = self.http_client().get(url);
        let query = filter.query_pairs();
        if !query.is_empty() {
            request = request.query(&query);
        }
        self.request_json(request).await
    }

    pub async fn create_attendance(
        &self,
        employee_id: &str,
        payload: &CreateAttendance,
    ) -> Result<AttendanceRecord, ApiError> {
        let url = self
            .endpoint(&format!(
                "/employees/{}/attendance/",
                encode_segment(employee_id)
            ))
            .await;
        self.request_json(self.http_client().post(url).json(payload))
            .await
    }
}
