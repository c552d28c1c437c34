#[cfg(test)]
pub mod mock {
    use crate::api::client::mock_transport::{register_mock, MockResponse, TestResponder};
    use crate::api::ApiError;
    use reqwest::Method;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    pub const GET: Method = Method::GET;
    pub const POST: Method = Method::POST;
    pub const PATCH: Method = Method::PATCH;
    pub const DELETE: Method = Method::DELETE;

    pub(crate) fn next_base() -> String {
        static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        format!("http://mock-{}", id)
    }

    /// What the mock transport saw of one outgoing request.
    #[derive(Clone, Debug)]
    pub struct RecordedRequest {
        pub method: Method,
        pub path: String,
        pub query: Vec<(String, String)>,
        pub authorization: Option<String>,
        pub body: Option<Value>,
    }

    impl RecordedRequest {
        pub(crate) fn capture(request: &reqwest::Request) -> Self {
            Self {
                method: request.method().clone(),
                path: request.url().path().to_string(),
                query: request
                    .url()
                    .query_pairs()
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect(),
                authorization: request
                    .headers()
                    .get(reqwest::header::AUTHORIZATION)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string),
                body: request
                    .body()
                    .and_then(|b| b.as_bytes())
                    .and_then(|bytes| serde_json::from_slice(bytes).ok()),
            }
        }

        pub fn query_value(&self, name: &str) -> Option<&str> {
            self.query
                .iter()
                .find(|(k, _)| k == name)
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
        received: Vec<RecordedRequest>,
    }

    #[derive(Clone)]
    struct Route {
        method: Method,
        path: String,
        query: Vec<(String, String)>,
        outcome: Outcome,
    }

    #[derive(Clone)]
    enum Outcome {
        Respond(MockResponse),
        Unreachable,
    }

    impl MockServer {
        pub async fn start_async() -> Self {
            Self::start()
        }

        pub fn start() -> Self {
            Self {
                inner: Arc::new(Mutex::new(Inner {
                    routes: Vec::new(),
                    received: Vec::new(),
                })),
                base: next_base(),
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
            let outcome = if then.unreachable {
                Outcome::Unreachable
            } else if let Some(raw) = then.raw_body {
                Outcome::Respond(MockResponse::raw(then.status.unwrap_or(200), raw))
            } else {
                Outcome::Respond(MockResponse::json(
                    then.status.unwrap_or(200),
                    then.body.unwrap_or_else(|| serde_json::json!({})),
                ))
            };

            let mut inner = self.inner.lock().expect("mock lock");
            inner.routes.push(Route {
                method,
                path,
                query: when.query,
                outcome,
            });
        }

        pub fn received(&self) -> Vec<RecordedRequest> {
            self.inner.lock().expect("mock lock").received.clone()
        }

        pub fn hits(&self, method: &Method, path: &str) -> usize {
            self.received()
                .iter()
                .filter(|r| r.method == *method && r.path == path)
                .count()
        }
    }

    impl TestResponder for MockServer {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
            let recorded = RecordedRequest::capture(request);
            let mut inner = self
                .inner
                .lock()
                .map_err(|_| ApiError::request_failed("mock lock"))?;

            let route = inner
                .routes
                .iter()
                .rev()
                .find(|route| {
                    route.method == recorded.method
                        && route.path == recorded.path
                        && route
                            .query
                            .iter()
                            .all(|(k, v)| recorded.query_value(k) == Some(v.as_str()))
                })
                .cloned();
            let method = recorded.method.clone();
            let path = recorded.path.clone();
            inner.received.push(recorded);

            match route.map(|route| route.outcome) {
                Some(Outcome::Respond(response)) => Ok(response),
                Some(Outcome::Unreachable) => {
                    Err(ApiError::request_failed("error sending request: connection refused"))
                }
                None => Err(ApiError::request_failed(format!(
                    "No mock for {} {}",
                    method, path
                ))),
            }
        }
    }

    #[derive(Default)]
    pub struct When {
        method: Option<Method>,
        path: Option<String>,
        query: Vec<(String, String)>,
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

        pub fn query_param(&mut self, name: &str, value: &str) -> &mut Self {
            self.query.push((name.to_string(), value.to_string()));
            self
        }
    }

    #[derive(Default)]
    pub struct Then {
        status: Option<u16>,
        body: Option<Value>,
        raw_body: Option<Vec<u8>>,
        unreachable: bool,
    }

    impl Then {
        pub fn status(&mut self, status: u16) -> &mut Self {
            self.status = Some(status);
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.body = Some(body);
            self
        }

        pub fn body(&mut self, body: &str) -> &mut Self {
            self.raw_body = Some(body.as_bytes().to_vec());
            self
        }

        /// Fails the request at the transport level instead of answering.
        pub fn unreachable(&mut self) -> &mut Self {
            self.unreachable = true;
            self
        }
    }
}

/// In-memory stand-in for the HR backend, enough to drive payroll and login flows.
#[cfg(test)]
pub mod fake_backend {
    use super::mock::{next_base, RecordedRequest};
    use crate::api::client::mock_transport::{register_mock, MockResponse, TestResponder};
    use crate::api::ApiError;
    use reqwest::Method;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    pub const ADMIN_EMAIL: &str = "admin@example.com";
    pub const ADMIN_PASSWORD: &str = "admin-password";
    pub const ADMIN_TOKEN: &str = "token-admin";

    #[derive(Clone)]
    struct FakeEmployee {
        id: String,
        name: String,
        base_salary: f64,
        active: bool,
    }

    #[derive(Default)]
    struct State {
        employees: Vec<FakeEmployee>,
        payrolls: Vec<Value>,
        next_id: u64,
    }

    #[derive(Clone)]
    pub struct FakeHrBackend {
        state: Arc<Mutex<State>>,
        base: String,
    }

    impl FakeHrBackend {
        pub fn start() -> Self {
            Self {
                state: Arc::new(Mutex::new(State::default())),
                base: next_base(),
            }
        }

        pub fn url(&self) -> String {
            let base_url = format!("{}/api", self.base);
            register_mock(base_url.clone(), Arc::new(self.clone()));
            base_url
        }

        pub fn add_employee(&self, name: &str, base_salary: f64, active: bool) {
            let mut state = self.state.lock().expect("fake backend lock");
            state.next_id += 1;
            let id = format!("emp-{}", state.next_id);
            state.employees.push(FakeEmployee {
                id,
                name: name.to_string(),
                base_salary,
                active,
            });
        }

        pub fn seed_payroll(&self, year: i32, month: u32, employee_name: &str, base_salary: f64) {
            let mut state = self.state.lock().expect("fake backend lock");
            state.next_id += 1;
            let id = format!("pay-{}", state.next_id);
            let row = payroll_row(&id, year, month, "emp-seeded", employee_name, base_salary);
            state.payrolls.push(row);
        }

        fn route(&self, request: &RecordedRequest) -> MockResponse {
            let path = request
                .path
                .strip_prefix("/api")
                .unwrap_or(&request.path)
                .to_string();
            if path == "/auth/login" && request.method == Method::POST {
                return self.login(request);
            }
            let expected = format!("Bearer {}", ADMIN_TOKEN);
            if request.authorization.as_deref() != Some(expected.as_str()) {
                return MockResponse::json(
                    401,
                    json!({ "message": "Unauthorized", "statusCode": 401 }),
                );
            }
            let method = &request.method;
            if *method == Method::POST && path == "/payrolls/generate" {
                return self.generate(request);
            }
            if path == "/payrolls" && (*method == Method::GET || *method == Method::DELETE) {
                let Some((year, month)) = period(request) else {
                    return bad_request(vec!["year must be an integer", "month must be an integer"]);
                };
                return if *method == Method::GET {
                    MockResponse::json(200, self.list(year, month))
                } else {
                    self.delete(year, month)
                };
            }
            MockResponse::json(
                404,
                json!({ "message": format!("Cannot {} {}", method, path) }),
            )
        }

        fn login(&self, request: &RecordedRequest) -> MockResponse {
            let body = request.body.clone().unwrap_or(Value::Null);
            if body["email"] == json!(ADMIN_EMAIL) && body["password"] == json!(ADMIN_PASSWORD) {
                MockResponse::json(201, json!({ "access_token": ADMIN_TOKEN }))
            } else {
                MockResponse::raw(401, Vec::new())
            }
        }

        fn list(&self, year: i32, month: u32) -> Value {
            let prefix = format!("{:04}-{:02}", year, month);
            let state = self.state.lock().expect("fake backend lock");
            Value::Array(
                state
                    .payrolls
                    .iter()
                    .filter(|row| {
                        row["paymentMonth"]
                            .as_str()
                            .is_some_and(|m| m.starts_with(&prefix))
                    })
                    .cloned()
                    .collect(),
            )
        }

        fn generate(&self, request: &RecordedRequest) -> MockResponse {
            let body = request.body.clone().unwrap_or(Value::Null);
            let (Some(year), Some(month)) = (body["year"].as_i64(), body["month"].as_u64()) else {
                return bad_request(vec!["year must be an integer", "month must be an integer"]);
            };
            let (year, month) = (year as i32, month as u32);
            if !self.list(year, month).as_array().is_some_and(|rows| rows.is_empty()) {
                return MockResponse::json(
                    409,
                    json!({
                        "message": format!("Payrolls for {}-{:02} already exist.", year, month),
                        "error": "Conflict",
                        "statusCode": 409
                    }),
                );
            }

            let mut state = self.state.lock().expect("fake backend lock");
            let active: Vec<FakeEmployee> = state
                .employees
                .iter()
                .filter(|e| e.active)
                .cloned()
                .collect();
            for employee in &active {
                state.next_id += 1;
                let id = format!("pay-{}", state.next_id);
                let row = payroll_row(&id, year, month, &employee.id, &employee.name, employee.base_salary);
                state.payrolls.push(row);
            }
            MockResponse::json(201, json!({ "count": active.len() }))
        }

        fn delete(&self, year: i32, month: u32) -> MockResponse {
            let prefix = format!("{:04}-{:02}", year, month);
            let mut state = self.state.lock().expect("fake backend lock");
            let before = state.payrolls.len();
            state.payrolls.retain(|row| {
                !row["paymentMonth"]
                    .as_str()
                    .is_some_and(|m| m.starts_with(&prefix))
            });
            let deleted = before - state.payrolls.len();
            MockResponse::json(200, json!({ "deletedCount": deleted }))
        }
    }

    impl TestResponder for FakeHrBackend {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
            Ok(self.route(&RecordedRequest::capture(request)))
        }
    }

    fn period(request: &RecordedRequest) -> Option<(i32, u32)> {
        let year = request.query_value("year")?.parse().ok()?;
        let month = request.query_value("month")?.parse().ok()?;
        Some((year, month))
    }

    fn bad_request(messages: Vec<&str>) -> MockResponse {
        MockResponse::json(
            400,
            json!({ "message": messages, "error": "Bad Request", "statusCode": 400 }),
        )
    }

    // Flat 10% deduction split into pension and income tax.
    fn payroll_row(
        id: &str,
        year: i32,
        month: u32,
        employee_id: &str,
        employee_name: &str,
        base_salary: f64,
    ) -> Value {
        let pension = (base_salary * 0.045).round();
        let tax = (base_salary * 0.055).round();
        json!({
            "id": id,
            "paymentMonth": format!("{:04}-{:02}-01T00:00:00.000Z", year, month),
            "baseSalary": base_salary,
            "bonus": 0.0,
            "deductions": [
                { "id": format!("{}-np", id), "type": "NATIONAL_PENSION", "amount": pension },
                { "id": format!("{}-it", id), "type": "INCOME_TAX", "amount": tax }
            ],
            "totalDeductions": pension + tax,
            "netPay": base_salary - pension - tax,
            "employee": { "id": employee_id, "name": employee_name }
        })
    }
}

/// JSON bodies shaped like the backend's responses.
#[cfg(test)]
pub mod fixtures {
    use serde_json::json;

    pub fn user_json(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "email": "minji.kim@example.com",
            "role": "EMPLOYEE",
            "createdAt": "2024-03-01T09:00:00Z",
            "updatedAt": "2024-03-01T09:00:00Z"
        })
    }

    pub fn employee_json(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "employeeNumber": "EMP-1709283600000",
            "name": "Kim Minji",
            "user": user_json("user-1"),
            "userId": "user-1",
            "joinDate": "2024-03-02",
            "residentRegistrationNumber": "000000-0000000",
            "phoneNumber": "010-0000-0000",
            "department": "Engineering",
            "position": "Engineer",
            "employmentType": "FULL_TIME",
            "bankName": "Test Bank",
            "bankAccountNumber": "123-456-7890",
            "resignationDate": null,
            "status": "EMPLOYED",
            "createdAt": "2024-03-01T09:00:00Z",
            "updatedAt": "2024-03-01T09:00:00Z",
            "salary": { "baseSalary": 3200000.0, "effectiveDate": "2024-03-01" }
        })
    }

    pub fn attendance_json(id: &str, clock_out: Option<&str>) -> serde_json::Value {
        json!({
            "id": id,
            "clockInTime": "2024-05-02T00:02:11Z",
            "clockOutTime": clock_out,
            "notes": null,
            "employee": {
                "id": "emp-1",
                "name": "Kim Minji",
                "department": "Engineering",
                "position": "Engineer",
                "user": { "email": "minji.kim@example.com" }
            }
        })
    }

    pub fn leave_json(id: &str, status: &str) -> serde_json::Value {
        json!({
            "id": id,
            "startDate": "2024-05-13",
            "endDate": "2024-05-14",
            "reason": "Family event",
            "status": status,
            "leaveType": "ANNUAL_LEAVE",
            "employee": {
                "id": "emp-1",
                "name": "Kim Minji",
                "department": "Engineering",
                "position": "Engineer"
            },
            "createdAt": "2024-05-01T02:00:00Z",
            "updatedAt": "2024-05-01T02:00:00Z"
        })
    }

    pub fn payroll_json(id: &str, payment_month: &str) -> serde_json::Value {
        json!({
            "id": id,
            "paymentMonth": payment_month,
            "baseSalary": 3200000.0,
            "bonus": 150000.0,
            "deductions": [
                { "id": "d-1", "type": "NATIONAL_PENSION", "amount": 144000.0 },
                { "id": "d-2", "type": "HEALTH_INSURANCE", "amount": 113440.0 },
                { "id": "d-3", "type": "INCOME_TAX", "amount": 91070.0 }
            ],
            "totalDeductions": 348510.0,
            "netPay": 3001490.0,
            "employee": { "id": "emp-1", "name": "Kim Minji" }
        })
    }
}
