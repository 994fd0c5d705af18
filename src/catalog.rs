//! Static seed catalog and the site context snapshot echoed to the widget.

use crate::models::{PropertyListing, PropertyType};
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::LazyLock;

pub const COMPANY: &str = "realestate.com.au";

/// Brand palette used by the chat widget.
#[derive(Debug, Serialize)]
pub struct Theme {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    #[serde(rename = "textLight")]
    pub text_light: &'static str,
}

const THEME: Theme = Theme {
    primary: "#E31E24",
    secondary: "#FFFFFF",
    accent: "#F5F5F5",
    text: "#333333",
    text_light: "#666666",
};

/// Snapshot echoed in every chat envelope.
#[derive(Debug, Serialize)]
pub struct SiteContext {
    pub company: &'static str,
    pub theme: Theme,
    pub properties: &'static [PropertyListing],
}

static CONTEXT: LazyLock<SiteContext> = LazyLock::new(|| SiteContext {
    company: COMPANY,
    theme: THEME,
    properties: listings(),
});

pub fn site_context() -> &'static SiteContext {
    &CONTEXT
}

/// All listings, in fixed catalog order. Read-only for the process lifetime.
pub fn listings() -> &'static [PropertyListing] {
    &LISTINGS
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

static LISTINGS: LazyLock<Vec<PropertyListing>> = LazyLock::new(|| {
    vec![
        PropertyListing {
            id: "prop_001".to_string(),
            address: "123 Collins Street, Melbourne VIC 3000".to_string(),
            price: 1_200_000,
            property_type: PropertyType::Apartment,
            bedrooms: 2,
            bathrooms: 2,
            car_spaces: 1,
            features: owned(&["City views", "Balcony", "Gym", "Pool", "Concierge"]),
            images: owned(&["img1.jpg", "img2.jpg"]),
            agent_contact: "Sarah Johnson - 0400 123 456".to_string(),
            suburb: "Melbourne".to_string(),
            state: "VIC".to_string(),
            postcode: "3000".to_string(),
            description: "Stunning modern apartment in the heart of Melbourne CBD with panoramic city views and premium amenities.".to_string(),
            size: 85,
            year_built: 2018,
            listing_date: date(2024, 1, 15),
            views: 1247,
            match_score: Some(95),
        },
        PropertyListing {
            id: "prop_002".to_string(),
            address: "45 Oak Avenue, Richmond VIC 3121".to_string(),
            price: 850_000,
            property_type: PropertyType::Townhouse,
            bedrooms: 3,
            bathrooms: 2,
            car_spaces: 2,
            features: owned(&[
                "Modern kitchen",
                "Garden",
                "Study nook",
                "Ducted heating",
                "Double garage",
            ]),
            images: owned(&["img3.jpg", "img4.jpg"]),
            agent_contact: "Mike Chen - 0400 789 012".to_string(),
            suburb: "Richmond".to_string(),
            state: "VIC".to_string(),
            postcode: "3121".to_string(),
            description: "Charming Victorian townhouse with modern renovations, perfect for families seeking character and convenience.".to_string(),
            size: 120,
            year_built: 1895,
            listing_date: date(2024, 1, 10),
            views: 892,
            match_score: Some(88),
        },
        PropertyListing {
            id: "prop_003".to_string(),
            address: "78 Beach Road, Bondi NSW 2026".to_string(),
            price: 2_100_000,
            property_type: PropertyType::House,
            bedrooms: 4,
            bathrooms: 3,
            car_spaces: 2,
            features: owned(&[
                "Ocean views",
                "Pool",
                "Large backyard",
                "Renovated kitchen",
                "Solar panels",
            ]),
            images: owned(&["img5.jpg", "img6.jpg"]),
            agent_contact: "Emma Wilson - 0400 345 678".to_string(),
            suburb: "Bondi".to_string(),
            state: "NSW".to_string(),
            postcode: "2026".to_string(),
            description: "Luxury beachfront home with stunning ocean views, perfect for entertaining and coastal living.".to_string(),
            size: 250,
            year_built: 2015,
            listing_date: date(2024, 1, 8),
            views: 2156,
            match_score: Some(92),
        },
        PropertyListing {
            id: "prop_004".to_string(),
            address: "12 Park Lane, South Yarra VIC 3141".to_string(),
            price: 650_000,
            property_type: PropertyType::Apartment,
            bedrooms: 1,
            bathrooms: 1,
            car_spaces: 1,
            features: owned(&["Park views", "Balcony", "Gym", "Pool", "Concierge"]),
            images: owned(&["img7.jpg", "img8.jpg"]),
            agent_contact: "David Smith - 0400 456 789".to_string(),
            suburb: "South Yarra".to_string(),
            state: "VIC".to_string(),
            postcode: "3141".to_string(),
            description: "Contemporary one-bedroom apartment with park views, ideal for professionals or investors.".to_string(),
            size: 65,
            year_built: 2020,
            listing_date: date(2024, 1, 12),
            views: 634,
            match_score: Some(85),
        },
        PropertyListing {
            id: "prop_005".to_string(),
            address: "89 Queen Street, Brisbane QLD 4000".to_string(),
            price: 750_000,
            property_type: PropertyType::Apartment,
            bedrooms: 2,
            bathrooms: 2,
            car_spaces: 1,
            features: owned(&[
                "City views",
                "Balcony",
                "Air conditioning",
                "Secure parking",
            ]),
            images: owned(&["img9.jpg", "img10.jpg"]),
            agent_contact: "Lisa Chen - 0400 567 890".to_string(),
            suburb: "Brisbane".to_string(),
            state: "QLD".to_string(),
            postcode: "4000".to_string(),
            description: "Modern apartment in Brisbane CBD with stunning city views and premium finishes.".to_string(),
            size: 75,
            year_built: 2019,
            listing_date: date(2024, 1, 14),
            views: 892,
            match_score: Some(88),
        },
        PropertyListing {
            id: "prop_006".to_string(),
            address: "45 Smith Street, Collingwood VIC 3066".to_string(),
            price: 580_000,
            property_type: PropertyType::Apartment,
            bedrooms: 1,
            bathrooms: 1,
            car_spaces: 0,
            features: owned(&[
                "Modern kitchen",
                "Hardwood floors",
                "High ceilings",
                "Close to transport",
            ]),
            images: owned(&["img11.jpg", "img12.jpg"]),
            agent_contact: "Tom Wilson - 0400 678 901".to_string(),
            suburb: "Collingwood".to_string(),
            state: "VIC".to_string(),
            postcode: "3066".to_string(),
            description: "Charming warehouse conversion apartment in trendy Collingwood, perfect for young professionals.".to_string(),
            size: 55,
            year_built: 2017,
            listing_date: date(2024, 1, 16),
            views: 456,
            match_score: Some(82),
        },
        PropertyListing {
            id: "prop_007".to_string(),
            address: "67 High Street, Prahran VIC 3181".to_string(),
            price: 950_000,
            property_type: PropertyType::House,
            bedrooms: 3,
            bathrooms: 2,
            car_spaces: 2,
            features: owned(&[
                "Victorian character",
                "Modern kitchen",
                "Large backyard",
                "Ducted heating",
                "Double garage",
            ]),
            images: owned(&["img13.jpg", "img14.jpg"]),
            agent_contact: "Sarah Brown - 0400 789 012".to_string(),
            suburb: "Prahran".to_string(),
            state: "VIC".to_string(),
            postcode: "3181".to_string(),
            description: "Beautiful Victorian house with modern updates, perfect for families. Features original period details with contemporary amenities.".to_string(),
            size: 180,
            year_built: 1890,
            listing_date: date(2024, 1, 18),
            views: 1123,
            match_score: Some(90),
        },
        PropertyListing {
            id: "prop_008".to_string(),
            address: "23 Main Street, Hawthorn VIC 3122".to_string(),
            price: 720_000,
            property_type: PropertyType::Apartment,
            bedrooms: 2,
            bathrooms: 2,
            car_spaces: 1,
            features: owned(&[
                "City views",
                "Balcony",
                "Gym",
                "Pool",
                "Concierge",
                "Air conditioning",
            ]),
            images: owned(&["img15.jpg", "img16.jpg"]),
            agent_contact: "James Wilson - 0400 890 123".to_string(),
            suburb: "Hawthorn".to_string(),
            state: "VIC".to_string(),
            postcode: "3122".to_string(),
            description: "Modern apartment in Hawthorn with excellent transport links and premium amenities. Perfect for professionals.".to_string(),
            size: 90,
            year_built: 2021,
            listing_date: date(2024, 1, 20),
            views: 789,
            match_score: Some(87),
        },
    ]
});
