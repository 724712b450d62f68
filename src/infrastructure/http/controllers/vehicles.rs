use crate::domain::entities::Vehicle;
use crate::infrastructure::http::middleware::{AppState, WebResult};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleFilter {
    pub category: Option<String>,
    #[serde(default)]
    pub available_only: bool,
}

impl VehicleFilter {
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        let category_ok = match (&self.category, &vehicle.category) {
            (Some(wanted), Some(actual)) => wanted.eq_ignore_ascii_case(actual),
            (Some(_), None) => false,
            (None, _) => true,
        };

        category_ok && (!self.available_only || vehicle.available)
    }
}

/// GET /api/vehicles - Public catalog
pub async fn list_vehicles(
    State(state): State<AppState>,
    Query(filter): Query<VehicleFilter>,
) -> WebResult<Json<Vec<Vehicle>>> {
    let vehicles = state.catalog.list_vehicles().await?;
    Ok(Json(vehicles.into_iter().filter(|v| filter.matches(v)).collect()))
}

/// GET /api/vehicles/:id - Vehicle detail
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> WebResult<Json<Vehicle>> {
    let vehicle = state.catalog.get_vehicle(&id).await?;
    Ok(Json(vehicle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(category: Option<&str>, available: bool) -> Vehicle {
        Vehicle {
            id: "c1".to_string(),
            brand: "Kia".to_string(),
            model: "Picanto".to_string(),
            year: None,
            category: category.map(str::to_string),
            daily_price: 200.0,
            transmission: None,
            fuel_type: None,
            seats: None,
            images: vec![],
            available,
        }
    }

    #[test]
    fn test_filter_by_category_case_insensitive() {
        let filter = VehicleFilter {
            category: Some("ECONOMY".to_string()),
            available_only: false,
        };
        assert!(filter.matches(&vehicle(Some("economy"), false)));
        assert!(!filter.matches(&vehicle(Some("suv"), true)));
        assert!(!filter.matches(&vehicle(None, true)));
    }

    #[test]
    fn test_filter_available_only() {
        let filter = VehicleFilter {
            category: None,
            available_only: true,
        };
        assert!(filter.matches(&vehicle(None, true)));
        assert!(!filter.matches(&vehicle(Some("suv"), false)));
    }
}
