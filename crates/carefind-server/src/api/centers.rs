use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use serde::Serialize;

use carefind_core::{CapabilityFlags, HealthCenterRecord};
use carefind_search::{classify, preferred_service_text};

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

/// One facility as presented to clients, with the display service text and
/// derived capability flags attached.
#[derive(Debug, Serialize)]
pub(super) struct CenterItem {
    pub name: String,
    pub street_address_1: String,
    pub street_address_2: Option<String>,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub phone: String,
    pub website: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// The winning service text across the enrichment stages — the same
    /// value the capability flags were classified from.
    pub services: Option<String>,
    pub capabilities: CapabilityFlags,
}

impl CenterItem {
    pub(super) fn from_record(record: &HealthCenterRecord) -> Self {
        let services = preferred_service_text(
            record.curated_service_types.as_deref(),
            record.enriched_service_types.as_deref(),
            record.service_types.as_deref(),
        );

        Self {
            name: record.name.clone(),
            street_address_1: record.street_address_1.clone(),
            street_address_2: record.street_address_2.clone(),
            city: record.city.clone(),
            state: record.state.clone(),
            zipcode: record.zipcode.clone(),
            phone: record.phone.clone(),
            website: record.website.clone(),
            latitude: record.coordinates.map(|p| p.latitude),
            longitude: record.coordinates.map(|p| p.longitude),
            capabilities: classify(services),
            services: services.map(str::to_string),
        }
    }
}

/// The unfiltered "list all" view. Records without coordinates are included
/// here — only radius searches exclude them.
pub(super) async fn list_centers(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let items: Vec<CenterItem> = state.records.iter().map(CenterItem::from_record).collect();
    (
        StatusCode::OK,
        Json(ApiResponse {
            data: items,
            meta: ResponseMeta::new(req_id.0),
        }),
    )
}
