#![allow(dead_code)]
use async_trait::async_trait;
use rentadrive::bootstrap::{assemble_state, Backends};
use rentadrive::config::Config;
use rentadrive::domain::entities::{
    AdminUser, Availability, AvailabilityQuery, BookingForm, BookingRecord, LoginRequest,
    LoginResponse, SiteSettings, Vehicle,
};
use rentadrive::domain::errors::{ApiError, ApiResult};
use rentadrive::domain::ports::{AdminApi, AuthContext, BookingApi, Clock, Notifier, VehicleCatalog};
use rentadrive::infrastructure::http::middleware::AppState;
use rentadrive::infrastructure::providers::RecordingNotifier;
use rentadrive::infrastructure::runtime::FixedClock;
use std::sync::{Arc, Mutex};

use super::fixtures::today;

/// A booking request as the backend received it
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub form: BookingForm,
    pub token: Option<String>,
}

/// In-memory backend with canned answers. Records every call it receives.
pub struct MockBackend {
    create_result: Mutex<ApiResult<BookingRecord>>,
    bookings_result: Mutex<ApiResult<Vec<BookingRecord>>>,
    vehicles_result: Mutex<ApiResult<Vec<Vehicle>>>,
    users_result: Mutex<ApiResult<Vec<AdminUser>>>,
    availability: Mutex<Availability>,
    pub created: Mutex<Vec<RecordedCall>>,
    pub list_calls: Mutex<Vec<Option<String>>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self {
            create_result: Mutex::new(Ok(BookingRecord {
                id: "b-1".to_string(),
                booking_number: Some("BK-1001".to_string()),
                status: None,
                total_amount: None,
            })),
            bookings_result: Mutex::new(Ok(vec![])),
            vehicles_result: Mutex::new(Ok(vec![])),
            users_result: Mutex::new(Ok(vec![])),
            availability: Mutex::new(Availability {
                available: true,
                conflicts: vec![],
            }),
            created: Mutex::new(vec![]),
            list_calls: Mutex::new(vec![]),
        }
    }
}

impl MockBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn on_create(&self, result: ApiResult<BookingRecord>) {
        *self.create_result.lock().unwrap() = result;
    }

    pub fn on_list_bookings(&self, result: ApiResult<Vec<BookingRecord>>) {
        *self.bookings_result.lock().unwrap() = result;
    }

    pub fn on_list_vehicles(&self, result: ApiResult<Vec<Vehicle>>) {
        *self.vehicles_result.lock().unwrap() = result;
    }

    pub fn on_list_users(&self, result: ApiResult<Vec<AdminUser>>) {
        *self.users_result.lock().unwrap() = result;
    }

    pub fn on_availability(&self, availability: Availability) {
        *self.availability.lock().unwrap() = availability;
    }

    pub fn created_calls(&self) -> Vec<RecordedCall> {
        self.created.lock().unwrap().clone()
    }

    pub fn list_call_count(&self) -> usize {
        self.list_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BookingApi for MockBackend {
    async fn create_booking(
        &self,
        form: &BookingForm,
        auth: &dyn AuthContext,
    ) -> ApiResult<BookingRecord> {
        self.created.lock().unwrap().push(RecordedCall {
            form: form.clone(),
            token: auth.get_token(),
        });
        self.create_result.lock().unwrap().clone()
    }

    async fn check_availability(
        &self,
        _vehicle_id: &str,
        _query: &AvailabilityQuery,
    ) -> ApiResult<Availability> {
        Ok(self.availability.lock().unwrap().clone())
    }

    async fn list_bookings(&self, auth: &dyn AuthContext) -> ApiResult<Vec<BookingRecord>> {
        self.list_calls.lock().unwrap().push(auth.get_token());
        self.bookings_result.lock().unwrap().clone()
    }
}

#[async_trait]
impl VehicleCatalog for MockBackend {
    async fn list_vehicles(&self) -> ApiResult<Vec<Vehicle>> {
        self.vehicles_result.lock().unwrap().clone()
    }

    async fn get_vehicle(&self, id: &str) -> ApiResult<Vehicle> {
        let vehicles = self.vehicles_result.lock().unwrap().clone()?;
        vehicles
            .into_iter()
            .find(|v| v.id == id)
            .ok_or_else(|| ApiError::server(404, "Car not found"))
    }
}

#[async_trait]
impl AdminApi for MockBackend {
    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        if request.password == "secret" {
            Ok(LoginResponse {
                token: "admin-token".to_string(),
            })
        } else {
            Err(ApiError::server(401, "Invalid credentials"))
        }
    }

    async fn list_users(&self, _auth: &dyn AuthContext) -> ApiResult<Vec<AdminUser>> {
        self.users_result.lock().unwrap().clone()
    }

    async fn get_settings(&self, _auth: &dyn AuthContext) -> ApiResult<SiteSettings> {
        Ok(SiteSettings(serde_json::json!({ "currency": "MAD" })))
    }
}

/// Everything a test needs to drive the app and inspect what happened.
pub struct TestApp {
    pub state: AppState,
    pub backend: Arc<MockBackend>,
    pub notifier: Arc<RecordingNotifier>,
}

pub fn test_app_with_config(config: Config) -> TestApp {
    let backend = MockBackend::new();
    let notifier = Arc::new(RecordingNotifier::new());

    let backends = Backends {
        bookings: backend.clone(),
        catalog: backend.clone(),
        admin: backend.clone(),
    };

    let state = assemble_state(
        backends,
        Arc::new(FixedClock(today())) as Arc<dyn Clock>,
        notifier.clone() as Arc<dyn Notifier>,
        &config,
    );

    TestApp {
        state,
        backend,
        notifier,
    }
}

pub fn test_app() -> TestApp {
    test_app_with_config(Config::default())
}
