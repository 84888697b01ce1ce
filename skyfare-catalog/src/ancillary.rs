use serde::{Deserialize, Serialize};

/// Optional extra services sold alongside a fare. Each carries a flat
/// charge; insurance and fare upgrades scale per passenger and live in
/// the pricing configuration instead.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddOnType {
    ExtraBaggage,
    PriorityCheckin,
    FastTrack,
    LoungeAccess,
    PriceLock,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddOn {
    pub add_on_type: AddOnType,
    pub name: String,
    pub description: Option<String>,
    pub price_inr: i32,
}

/// The airline's add-on catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddOnCatalog {
    add_ons: Vec<AddOn>,
}

impl AddOnCatalog {
    pub fn new(add_ons: Vec<AddOn>) -> Self {
        Self { add_ons }
    }

    /// The standard catalog sold on every flight.
    pub fn standard() -> Self {
        Self::new(vec![
            AddOn {
                add_on_type: AddOnType::ExtraBaggage,
                name: "Extra baggage".to_string(),
                description: Some("Additional 15kg checked baggage allowance".to_string()),
                price_inr: 1200,
            },
            AddOn {
                add_on_type: AddOnType::PriorityCheckin,
                name: "Priority check-in".to_string(),
                description: Some("Dedicated counter and early baggage handling".to_string()),
                price_inr: 600,
            },
            AddOn {
                add_on_type: AddOnType::FastTrack,
                name: "Fast track security".to_string(),
                description: Some("Skip the queue at security screening".to_string()),
                price_inr: 800,
            },
            AddOn {
                add_on_type: AddOnType::LoungeAccess,
                name: "Airport lounge access".to_string(),
                description: Some("Complimentary food and beverages before departure".to_string()),
                price_inr: 2500,
            },
            AddOn {
                add_on_type: AddOnType::PriceLock,
                name: "Price lock (24 hours)".to_string(),
                description: Some("Hold this exact price for 24 hours".to_string()),
                price_inr: 672,
            },
        ])
    }

    pub fn all(&self) -> &[AddOn] {
        &self.add_ons
    }

    pub fn get(&self, add_on_type: AddOnType) -> Option<&AddOn> {
        self.add_ons.iter().find(|a| a.add_on_type == add_on_type)
    }

    pub fn price_of(&self, add_on_type: AddOnType) -> i32 {
        self.get(add_on_type).map(|a| a.price_inr).unwrap_or(0)
    }
}

/// In-flight meal choices, priced per meal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealOption {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub price_inr: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealCatalog {
    options: Vec<MealOption>,
}

impl MealCatalog {
    pub fn new(options: Vec<MealOption>) -> Self {
        Self { options }
    }

    pub fn standard() -> Self {
        let meal = |code: &str, name: &str, description: &str, price_inr: i32| MealOption {
            code: code.to_string(),
            name: name.to_string(),
            description: Some(description.to_string()),
            price_inr,
        };
        Self::new(vec![
            meal("none", "No meal", "Standard meal service as per airline policy", 0),
            meal("veg", "Vegetarian", "Indian vegetarian meal with dairy products", 450),
            meal("nonveg", "Non-vegetarian", "Chicken or mutton based meal with sides", 550),
            meal("jain", "Jain", "Meal prepared without root vegetables", 500),
            meal("vegan", "Vegan", "Plant-based meal without any animal products", 520),
            meal("diabetic", "Diabetic friendly", "Low sugar, high fiber meal", 480),
        ])
    }

    pub fn all(&self) -> &[MealOption] {
        &self.options
    }

    /// Price for a meal code. "none" and unrecognized codes charge nothing.
    pub fn price_of(&self, code: &str) -> i32 {
        self.options
            .iter()
            .find(|m| m.code == code)
            .map(|m| m.price_inr)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_add_on_prices() {
        let catalog = AddOnCatalog::standard();
        assert_eq!(catalog.price_of(AddOnType::ExtraBaggage), 1200);
        assert_eq!(catalog.price_of(AddOnType::LoungeAccess), 2500);
        assert_eq!(catalog.price_of(AddOnType::PriceLock), 672);
    }

    #[test]
    fn meal_prices_fall_back_to_zero() {
        let catalog = MealCatalog::standard();
        assert_eq!(catalog.price_of("nonveg"), 550);
        assert_eq!(catalog.price_of("none"), 0);
        assert_eq!(catalog.price_of("unknown-code"), 0);
    }
}
