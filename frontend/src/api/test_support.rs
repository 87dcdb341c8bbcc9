#[cfg(test)]
pub mod mock {
    use crate::api::client::{register_mock, MockResponse, TestResponder};
    use crate::api::ApiError;
    use reqwest::Method;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    pub const GET: Method = Method::GET;
    pub const POST: Method = Method::POST;
    pub const DELETE: Method = Method::DELETE;

    fn next_host(prefix: &str) -> String {
        static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        format!("http://{}-{}", prefix, id)
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedRequest {
        pub method: Method,
        pub path: String,
        pub query: Vec<(String, String)>,
        pub body: Option<Value>,
        pub content_type: Option<String>,
    }

    impl RecordedRequest {
        fn capture(request: &reqwest::Request) -> Self {
            Self {
                method: request.method().clone(),
                path: request.url().path().to_string(),
                query: request
                    .url()
                    .query_pairs()
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect(),
                body: request
                    .body()
                    .and_then(|body| body.as_bytes())
                    .and_then(|bytes| serde_json::from_slice(bytes).ok()),
                content_type: request
                    .headers()
                    .get(reqwest::header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string),
            }
        }

        pub fn query_value(&self, key: &str) -> Option<&str> {
            self.query
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        }
    }

    #[derive(Clone)]
    pub struct MockServer {
        inner: Arc<Mutex<Inner>>,
        base: String,
    }

    struct Inner {
        routes: Vec<Route>,
        requests: Vec<RecordedRequest>,
    }

    #[derive(Clone)]
    struct Route {
        method: Method,
        path: String,
        response: MockResponse,
    }

    impl MockServer {
        pub async fn start_async() -> Self {
            Self::start()
        }

        pub fn start() -> Self {
            Self {
                inner: Arc::new(Mutex::new(Inner {
                    routes: Vec::new(),
                    requests: Vec::new(),
                })),
                base: next_host("mock"),
            }
        }

        pub fn url(&self, path: &str) -> String {
            let base_url = format!("{}{}", self.base, path);
            register_mock(base_url.clone(), Arc::new(self.clone()));
            base_url
        }

        pub fn mock<F>(&self, f: F)
        where
            F: FnOnce(&mut When, &mut Then),
        {
            let mut when = When::default();
            let mut then = Then::default();
            f(&mut when, &mut then);

            let method = when.method.clone().expect("mock requires method");
            let path = when.path.clone().expect("mock requires path");
            let response = match then.body {
                Some(Body::Json(body)) => MockResponse::json(then.status.unwrap_or(200), body),
                Some(Body::Text(body)) => MockResponse::text(then.status.unwrap_or(200), body),
                None => MockResponse::json(then.status.unwrap_or(200), serde_json::json!({})),
            };

            let mut inner = self.inner.lock().expect("mock lock");
            inner.routes.push(Route {
                method,
                path,
                response,
            });
        }

        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.inner.lock().expect("mock lock").requests.clone()
        }

        pub fn hits(&self) -> usize {
            self.inner.lock().expect("mock lock").requests.len()
        }
    }

    impl TestResponder for MockServer {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
            let method = request.method();
            let path = request.url().path();
            let mut inner = self
                .inner
                .lock()
                .map_err(|_| ApiError::network("mock lock"))?;
            inner.requests.push(RecordedRequest::capture(request));

            let route = inner
                .routes
                .iter()
                .rev()
                .find(|route| route.method == *method && route.path == path)
                .cloned();

            route
                .map(|route| route.response)
                .ok_or_else(|| ApiError::network(format!("No mock for {} {}", method, path)))
        }
    }

    #[derive(Default)]
    pub struct When {
        method: Option<Method>,
        path: Option<String>,
    }

    impl When {
        pub fn method(&mut self, method: Method) -> &mut Self {
            self.method = Some(method);
            self
        }

        pub fn path(&mut self, path: &str) -> &mut Self {
            self.path = Some(path.to_string());
            self
        }
    }

    enum Body {
        Json(Value),
        Text(String),
    }

    #[derive(Default)]
    pub struct Then {
        status: Option<u16>,
        body: Option<Body>,
    }

    impl Then {
        pub fn status(&mut self, status: u16) -> &mut Self {
            self.status = Some(status);
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.body = Some(Body::Json(body));
            self
        }

        pub fn body(&mut self, body: &str) -> &mut Self {
            self.body = Some(Body::Text(body.to_string()));
            self
        }
    }

    /// In-memory stand-in for the HRMS REST API: validates input, enforces
    /// uniqueness and answers with the same shapes and messages as the server.
    #[derive(Clone)]
    pub struct FakeBackend {
        inner: Arc<Mutex<FakeState>>,
        base: String,
    }

    #[derive(Default)]
    struct FakeState {
        prefix: String,
        employees: Vec<Value>,
        attendance: Vec<FakeAttendance>,
        next_id: u64,
        requests: Vec<RecordedRequest>,
    }

    #[derive(Clone)]
    struct FakeAttendance {
        id: u64,
        employee_id: String,
        date: chrono::NaiveDate,
        status: &'static str,
    }

    impl FakeAttendance {
        fn to_json(&self) -> Value {
            let label = if self.status == "present" {
                "Present"
            } else {
                "Absent"
            };
            serde_json::json!({
                "id": self.id.to_string(),
                "employee_id": self.employee_id,
                "date": self.date.format("%Y-%m-%d").to_string(),
                "status": label,
                "created_at": "2024-01-01T00:00:00Z",
            })
        }
    }

    impl FakeBackend {
        pub fn start() -> Self {
            Self {
                inner: Arc::new(Mutex::new(FakeState::default())),
                base: next_host("fake"),
            }
        }

        pub fn url(&self, path: &str) -> String {
            let base_url = format!("{}{}", self.base, path);
            self.inner.lock().expect("fake lock").prefix = path.to_string();
            register_mock(base_url.clone(), Arc::new(self.clone()));
            base_url
        }

        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.inner.lock().expect("fake lock").requests.clone()
        }

        pub fn hits(&self) -> usize {
            self.inner.lock().expect("fake lock").requests.len()
        }
    }

    impl TestResponder for FakeBackend {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
            let mut state = self
                .inner
                .lock()
                .map_err(|_| ApiError::network("fake lock"))?;
            let recorded = RecordedRequest::capture(request);
            state.requests.push(recorded.clone());

            let relative = recorded
                .path
                .strip_prefix(state.prefix.as_str())
                .unwrap_or(recorded.path.as_str())
                .to_string();
            let segments: Vec<String> = relative
                .split('/')
                .filter(|s| !s.is_empty())
                .map(|s| {
                    percent_encoding::percent_decode_str(s)
                        .decode_utf8_lossy()
                        .into_owned()
                })
                .collect();
            let segments: Vec<&str> = segments.iter().map(String::as_str).collect();

            Ok(match (recorded.method.as_str(), segments.as_slice()) {
                ("GET", ["employees"]) => {
                    MockResponse::json(200, Value::Array(state.employees.clone()))
                }
                ("POST", ["employees"]) => state.create_employee(recorded.body.as_ref()),
                ("DELETE", ["employees", id]) => state.delete_employee(id),
                ("GET", ["employees", id, "attendance"]) => state.list_attendance(id, &recorded),
                ("POST", ["employees", id, "attendance"]) => {
                    state.create_attendance(id, recorded.body.as_ref())
                }
                ("GET", ["dashboard"]) => state.dashboard(),
                _ => MockResponse::json(404, serde_json::json!({ "detail": "Not found." })),
            })
        }
    }

    fn not_found() -> MockResponse {
        MockResponse::json(404, serde_json::json!({ "detail": "Not found." }))
    }

    fn field_text<'a>(body: Option<&'a Value>, key: &str) -> &'a str {
        body.and_then(|b| b.get(key))
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    impl FakeState {
        fn employee_exists(&self, id: &str) -> bool {
            self.employees.iter().any(|e| e["employee_id"] == id)
        }

        fn create_employee(&mut self, body: Option<&Value>) -> MockResponse {
            let mut errors = serde_json::Map::new();
            for key in ["employee_id", "full_name", "email", "department"] {
                if field_text(body, key).trim().is_empty() {
                    errors.insert(key.into(), serde_json::json!(["This field may not be blank."]));
                }
            }
            let email = field_text(body, "email").to_lowercase();
            if !email.is_empty() && !is_plausible_email(&email) {
                errors.insert(
                    "email".into(),
                    serde_json::json!(["Enter a valid email address."]),
                );
            }
            if !errors.is_empty() {
                return MockResponse::json(400, Value::Object(errors));
            }

            let employee_id = field_text(body, "employee_id").to_string();
            if self.employee_exists(&employee_id) || self.employees.iter().any(|e| e["email"] == email)
            {
                return MockResponse::json(
                    400,
                    serde_json::json!({ "detail": "Employee ID or email already exists." }),
                );
            }

            self.next_id += 1;
            let created = serde_json::json!({
                "id": self.next_id,
                "employee_id": employee_id,
                "full_name": field_text(body, "full_name"),
                "email": email,
                "department": field_text(body, "department"),
                "created_at": "2024-01-01T00:00:00Z",
            });
            self.employees.push(created.clone());
            MockResponse::json(201, created)
        }

        fn delete_employee(&mut self, id: &str) -> MockResponse {
            if !self.employee_exists(id) {
                return not_found();
            }
            self.employees.retain(|e| e["employee_id"] != id);
            MockResponse::text(204, "")
        }

        fn list_attendance(&self, id: &str, request: &RecordedRequest) -> MockResponse {
            let Some(employee) = self.employees.iter().find(|e| e["employee_id"] == id) else {
                return not_found();
            };
            let parse = |key: &str| {
                request
                    .query_value(key)
                    .and_then(|v| chrono::NaiveDate::parse_from_str(v, "%Y-%m-%d").ok())
            };
            let (from, to) = (parse("from"), parse("to"));
            let mut records: Vec<&FakeAttendance> = self
                .attendance
                .iter()
                .filter(|r| r.employee_id == id)
                .filter(|r| from.map_or(true, |f| r.date >= f))
                .filter(|r| to.map_or(true, |t| r.date <= t))
                .collect();
            records.sort_by(|a, b| b.date.cmp(&a.date));
            let present = records.iter().filter(|r| r.status == "present").count();
            let absent = records.iter().filter(|r| r.status == "absent").count();
            MockResponse::json(
                200,
                serde_json::json!({
                    "employee": employee,
                    "attendance": records.iter().map(|r| r.to_json()).collect::<Vec<_>>(),
                    "summary": {
                        "total_records": records.len(),
                        "present_days": present,
                        "absent_days": absent,
                    }
                }),
            )
        }

        fn create_attendance(&mut self, id: &str, body: Option<&Value>) -> MockResponse {
            if !self.employee_exists(id) {
                return not_found();
            }
            let Ok(date) = chrono::NaiveDate::parse_from_str(field_text(body, "date"), "%Y-%m-%d")
            else {
                return MockResponse::json(
                    400,
                    serde_json::json!({ "date": ["Date has wrong format. Use YYYY-MM-DD."] }),
                );
            };
            let status = match field_text(body, "status").to_lowercase().as_str() {
                "present" => "present",
                "absent" => "absent",
                _ => {
                    return MockResponse::json(
                        400,
                        serde_json::json!({ "status": ["Status must be 'present' or 'absent'."] }),
                    )
                }
            };
            if self
                .attendance
                .iter()
                .any(|r| r.employee_id == id && r.date == date)
            {
                return MockResponse::json(
                    400,
                    serde_json::json!({ "detail": "Attendance already marked for this date." }),
                );
            }
            self.next_id += 1;
            let record = FakeAttendance {
                id: self.next_id,
                employee_id: id.to_string(),
                date,
                status,
            };
            self.attendance.push(record.clone());
            MockResponse::json(201, record.to_json())
        }

        fn dashboard(&self) -> MockResponse {
            let present = self
                .attendance
                .iter()
                .filter(|r| r.status == "present")
                .count();
            MockResponse::json(
                200,
                serde_json::json!({
                    "employees": self.employees.len(),
                    "attendance_records": self.attendance.len(),
                    "present_days": present,
                    "absent_days": self.attendance.len() - present,
                }),
            )
        }
    }

    fn is_plausible_email(email: &str) -> bool {
        match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
            }
            None => false,
        }
    }
}
