use crate::domain::entities::{AdminUser, LoginRequest, LoginResponse, SiteSettings, Vehicle};
use crate::domain::errors::ApiResult;
use crate::domain::ports::auth_context::AuthContext;
use async_trait::async_trait;

#[async_trait]
pub trait VehicleCatalog: Send + Sync {
    async fn list_vehicles(&self) -> ApiResult<Vec<Vehicle>>;

    async fn get_vehicle(&self, id: &str) -> ApiResult<Vehicle>;
}

#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse>;

    async fn list_users(&self, auth: &dyn AuthContext) -> ApiResult<Vec<AdminUser>>;

    async fn get_settings(&self, auth: &dyn AuthContext) -> ApiResult<SiteSettings>;
}
