use serde::{Deserialize, Serialize};

fn default_available() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(alias = "_id")]
    pub id: String,
    pub brand: String,
    pub model: String,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub category: Option<String>,
    pub daily_price: f64,
    #[serde(default)]
    pub transmission: Option<String>,
    #[serde(default)]
    pub fuel_type: Option<String>,
    #[serde(default)]
    pub seats: Option<u8>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

impl Vehicle {
    pub fn display_name(&self) -> String {
        match self.year {
            Some(year) => format!("{} {} ({})", self.brand, self.model, year),
            None => format!("{} {}", self.brand, self.model),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_defaults_to_available() {
        let vehicle: Vehicle = serde_json::from_value(serde_json::json!({
            "_id": "car-1",
            "brand": "Dacia",
            "model": "Logan",
            "dailyPrice": 250.0
        }))
        .unwrap();

        assert!(vehicle.available);
        assert!(vehicle.images.is_empty());
        assert_eq!(vehicle.display_name(), "Dacia Logan");
    }

    #[test]
    fn test_display_name_includes_year() {
        let vehicle: Vehicle = serde_json::from_value(serde_json::json!({
            "id": "car-2",
            "brand": "Peugeot",
            "model": "208",
            "year": 2023,
            "dailyPrice": 300.0
        }))
        .unwrap();

        assert_eq!(vehicle.display_name(), "Peugeot 208 (2023)");
    }
}
