use crate::domain::entities::{Availability, AvailabilityQuery, BookingForm, BookingRecord};
use crate::domain::errors::ApiResult;
use crate::domain::ports::auth_context::AuthContext;
use async_trait::async_trait;

#[async_trait]
pub trait BookingApi: Send + Sync {
    /// Create a booking through the endpoint matching the form's channel
    async fn create_booking(
        &self,
        form: &BookingForm,
        auth: &dyn AuthContext,
    ) -> ApiResult<BookingRecord>;

    /// Read-only conflict check for a vehicle over a date window
    async fn check_availability(
        &self,
        vehicle_id: &str,
        query: &AvailabilityQuery,
    ) -> ApiResult<Availability>;

    async fn list_bookings(&self, auth: &dyn AuthContext) -> ApiResult<Vec<BookingRecord>>;
}
