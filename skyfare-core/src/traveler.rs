use serde::{Deserialize, Serialize};
use skyfare_shared::pii::Masked;

/// Passenger details as captured by the booking form. Fields are kept as
/// submitted strings; presence is checked by `validation::validate_draft`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TravelerDetails {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub date_of_birth: String,
}

impl TravelerDetails {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

/// Booking contact details. Masked so they never appear in Debug logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: Masked<String>,
    pub mobile: Masked<String>,
}

impl ContactInfo {
    pub fn new(email: impl Into<String>, mobile: impl Into<String>) -> Self {
        Self {
            email: Masked(email.into()),
            mobile: Masked(mobile.into()),
        }
    }
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self::new("", "")
    }
}
