//! Read-only catalog endpoints.

use axum::extract::Path;
use axum::Json;
use tracing::info;

use crate::catalog;
use crate::error::ApiError;
use crate::models::PropertyListing;

/// Fetches all listings, in catalog order
pub async fn get_properties() -> Json<&'static [PropertyListing]> {
    let listings = catalog::listings();
    info!("Fetching all {} listings", listings.len());
    Json(listings)
}

/// Fetches a specific listing by its ID
pub async fn get_property(
    Path(id): Path<String>,
) -> Result<Json<&'static PropertyListing>, ApiError> {
    info!("Fetching listing with ID: {}", id);
    catalog::listings()
        .iter()
        .find(|p| p.id == id)
        .map(Json)
        .ok_or(ApiError::PropertyNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lists_whole_catalog() {
        let Json(listings) = get_properties().await;
        assert_eq!(listings.len(), 8);
    }

    #[tokio::test]
    async fn finds_listing_by_id() {
        let Json(listing) = get_property(Path("prop_003".to_string())).await.unwrap();
        assert_eq!(listing.suburb, "Bondi");
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let err = get_property(Path("prop_999".to_string())).await.unwrap_err();
        assert!(matches!(err, ApiError::PropertyNotFound));
    }
}
