use crate::shared::Locale;
use reqwest::Url;
use serde::Deserialize;

const WHATSAPP_SEND_URL: &str = "https://api.whatsapp.com/send";

/// Details the visitor filled in before being handed over to WhatsApp.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRequest {
    pub name: String,
    pub message: Option<String>,
    pub vehicle_name: Option<String>,
    pub pickup_date: Option<String>,
    pub return_date: Option<String>,
    pub pickup_location: Option<String>,
}

/// Builds click-to-chat links to the agency's WhatsApp number.
#[derive(Debug, Clone)]
pub struct WhatsAppService {
    phone: Option<String>,
}

impl WhatsAppService {
    pub fn new(phone: Option<&str>) -> Self {
        let phone = phone
            .map(|p| p.chars().filter(char::is_ascii_digit).collect::<String>())
            .filter(|digits| !digits.is_empty());

        Self { phone }
    }

    pub fn is_configured(&self) -> bool {
        self.phone.is_some()
    }

    /// `None` when no agency number is configured.
    pub fn contact_link(&self, request: &ContactRequest, locale: Locale) -> Option<String> {
        let phone = self.phone.as_deref()?;
        let text = compose_message(request, locale);

        Url::parse_with_params(WHATSAPP_SEND_URL, &[("phone", phone), ("text", text.as_str())])
            .ok()
            .map(String::from)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

pub fn compose_message(request: &ContactRequest, locale: Locale) -> String {
    let name = request.name.trim();
    let mut lines = Vec::new();

    lines.push(match (locale, name.is_empty()) {
        (Locale::En, true) => "Hello,".to_string(),
        (Locale::En, false) => format!("Hello, my name is {}.", name),
        (Locale::Fr, true) => "Bonjour,".to_string(),
        (Locale::Fr, false) => format!("Bonjour, je m'appelle {}.", name),
    });

    if let Some(vehicle) = non_empty(&request.vehicle_name) {
        lines.push(match locale {
            Locale::En => format!("I would like to book the {}.", vehicle),
            Locale::Fr => format!("Je souhaite réserver le véhicule {}.", vehicle),
        });
    }

    if let (Some(pickup), Some(ret)) = (
        non_empty(&request.pickup_date),
        non_empty(&request.return_date),
    ) {
        lines.push(match locale {
            Locale::En => format!("Dates: {} to {}", pickup, ret),
            Locale::Fr => format!("Dates : du {} au {}", pickup, ret),
        });
    }

    if let Some(location) = non_empty(&request.pickup_location) {
        lines.push(match locale {
            Locale::En => format!("Pickup location: {}", location),
            Locale::Fr => format!("Lieu de prise en charge : {}", location),
        });
    }

    if let Some(message) = non_empty(&request.message) {
        lines.push(message.to_string());
    }

    lines.join("\n")
}
