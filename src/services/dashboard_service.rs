use crate::domain::entities::{AdminUser, BookingRecord, BookingStatus, Vehicle};
use crate::domain::errors::ApiResult;
use crate::domain::ports::{AdminApi, AuthContext, BookingApi, VehicleCatalog};
use serde::Serialize;
use std::sync::Arc;

/// One dashboard panel. A failing panel carries its error instead of data so
/// the other panels still render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<T>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> From<ApiResult<Vec<T>>> for Section<T> {
    fn from(result: ApiResult<Vec<T>>) -> Self {
        match result {
            Ok(items) => Section {
                items: Some(items),
                error: None,
            },
            Err(e) => Section {
                items: None,
                error: Some(e.to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_cars: usize,
    pub available_cars: usize,
    pub total_users: usize,
    pub total_bookings: usize,
    pub pending_bookings: usize,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub cars: Section<Vehicle>,
    pub users: Section<AdminUser>,
    pub bookings: Section<BookingRecord>,
}

#[derive(Clone)]
pub struct DashboardService {
    catalog: Arc<dyn VehicleCatalog>,
    admin: Arc<dyn AdminApi>,
    bookings: Arc<dyn BookingApi>,
}

impl DashboardService {
    pub fn new(
        catalog: Arc<dyn VehicleCatalog>,
        admin: Arc<dyn AdminApi>,
        bookings: Arc<dyn BookingApi>,
    ) -> Self {
        Self {
            catalog,
            admin,
            bookings,
        }
    }

    /// Fetch cars, users and bookings concurrently and summarise them.
    pub async fn load(&self, auth: &dyn AuthContext) -> Dashboard {
        let (cars, users, bookings) = tokio::join!(
            self.catalog.list_vehicles(),
            self.admin.list_users(auth),
            self.bookings.list_bookings(auth)
        );

        for (section, result) in [
            ("cars", cars.as_ref().err()),
            ("users", users.as_ref().err()),
            ("bookings", bookings.as_ref().err()),
        ] {
            if let Some(e) = result {
                tracing::warn!("Dashboard section {} failed to load: {}", section, e);
            }
        }

        let cars = Section::from(cars);
        let users = Section::from(users);
        let bookings = Section::from(bookings);

        Dashboard {
            stats: compute_stats(&cars, &users, &bookings),
            cars,
            users,
            bookings,
        }
    }
}

fn compute_stats(
    cars: &Section<Vehicle>,
    users: &Section<AdminUser>,
    bookings: &Section<BookingRecord>,
) -> DashboardStats {
    let cars = cars.items.as_deref().unwrap_or_default();
    let users = users.items.as_deref().unwrap_or_default();
    let bookings = bookings.items.as_deref().unwrap_or_default();

    DashboardStats {
        total_cars: cars.len(),
        available_cars: cars.iter().filter(|c| c.available).count(),
        total_users: users.len(),
        total_bookings: bookings.len(),
        pending_bookings: bookings
            .iter()
            .filter(|b| b.status == Some(BookingStatus::Pending))
            .count(),
        revenue: bookings
            .iter()
            .filter(|b| b.status != Some(BookingStatus::Cancelled))
            .filter_map(|b| b.total_amount)
            .sum(),
    }
}
