use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of dwelling a listing advertises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    Townhouse,
}

impl PropertyType {
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::Townhouse => "townhouse",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A property listing from the seed catalog.
///
/// Immutable once seeded; prices are whole dollars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyListing {
    pub id: String,
    pub address: String,
    pub price: i64,
    pub property_type: PropertyType,
    pub bedrooms: i16,
    pub bathrooms: i16,
    pub car_spaces: i16,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub agent_contact: String,
    pub suburb: String,
    pub state: String,
    pub postcode: String,
    pub description: String,
    pub size: i32,
    pub year_built: i32,
    pub listing_date: NaiveDate,
    pub views: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_score: Option<u8>,
}

/// Search constraints pulled out of a free-text message.
///
/// Absent fields mean "no constraint", never "constraint of zero".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    pub budget: Option<i64>,
    pub bedrooms: Option<i16>,
    pub property_type: Option<PropertyType>,
}

impl Criteria {
    pub fn is_empty(&self) -> bool {
        self.budget.is_none() && self.bedrooms.is_none() && self.property_type.is_none()
    }
}

/// One assistant turn: the text shown to the user plus any recommended
/// listings and a category tag for the widget.
///
/// Doubles as the wire shape the external AI process emits, hence the
/// `type` rename and the lenient defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(default)]
    pub recommendations: Vec<PropertyListing>,
    #[serde(rename = "type", default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "chat".to_string()
}
