use std::collections::HashMap;

use crate::traveler::{ContactInfo, TravelerDetails};

/// Field-keyed validation errors for a booking draft. An empty map means
/// the draft is complete enough to confirm.
pub type FieldErrors = HashMap<String, String>;

/// Check required traveler and contact fields. Keys follow the form the
/// booking review screen renders inline: `traveler_{index}_{field}` for
/// per-traveler fields, plus top-level `email` and `mobile`.
pub fn validate_draft(travelers: &[TravelerDetails], contact: &ContactInfo) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if travelers.is_empty() {
        errors.insert(
            "travelers".to_string(),
            "At least one traveler is required".to_string(),
        );
    }

    for (index, traveler) in travelers.iter().enumerate() {
        if traveler.first_name.trim().is_empty() {
            errors.insert(
                format!("traveler_{}_first_name", index),
                "First name is required".to_string(),
            );
        }
        if traveler.last_name.trim().is_empty() {
            errors.insert(
                format!("traveler_{}_last_name", index),
                "Last name is required".to_string(),
            );
        }
        if traveler.gender.trim().is_empty() {
            errors.insert(
                format!("traveler_{}_gender", index),
                "Gender is required".to_string(),
            );
        }
        if traveler.date_of_birth.trim().is_empty() {
            errors.insert(
                format!("traveler_{}_date_of_birth", index),
                "Date of birth is required".to_string(),
            );
        }
    }

    if contact.mobile.0.trim().is_empty() {
        errors.insert("mobile".to_string(), "Mobile number is required".to_string());
    }
    if contact.email.0.trim().is_empty() {
        errors.insert("email".to_string(), "Email is required".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_traveler() -> TravelerDetails {
        TravelerDetails {
            first_name: "Ananya".to_string(),
            last_name: "Sharma".to_string(),
            gender: "female".to_string(),
            date_of_birth: "1992-04-17".to_string(),
        }
    }

    #[test]
    fn complete_draft_has_no_errors() {
        let errors = validate_draft(
            &[complete_traveler()],
            &ContactInfo::new("ananya@example.com", "9876543210"),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn missing_fields_are_keyed_per_traveler() {
        let mut second = complete_traveler();
        second.last_name = "  ".to_string();
        second.date_of_birth = String::new();

        let errors = validate_draft(
            &[complete_traveler(), second],
            &ContactInfo::new("ananya@example.com", ""),
        );

        assert_eq!(
            errors.get("traveler_1_last_name").map(String::as_str),
            Some("Last name is required")
        );
        assert!(errors.contains_key("traveler_1_date_of_birth"));
        assert_eq!(
            errors.get("mobile").map(String::as_str),
            Some("Mobile number is required")
        );
        assert!(!errors.contains_key("traveler_0_first_name"));
    }

    #[test]
    fn empty_traveler_list_is_rejected() {
        let errors = validate_draft(&[], &ContactInfo::new("a@b.c", "123"));
        assert!(errors.contains_key("travelers"));
    }
}
