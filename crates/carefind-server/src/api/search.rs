use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use carefind_core::Capability;
use carefind_geo::ResolveError;

use crate::middleware::RequestId;

use super::centers::CenterItem;
use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct SearchRequest {
    postal_code: String,
    radius_miles: f64,
    /// Capability filter names in kebab-case; empty means no service filter.
    #[serde(default)]
    capabilities: Vec<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct SearchData {
    location: ResolvedLocation,
    results: Vec<SearchResultItem>,
}

#[derive(Debug, Serialize)]
pub(super) struct ResolvedLocation {
    postal_code: String,
    latitude: f64,
    longitude: f64,
    city: Option<String>,
    region: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct SearchResultItem {
    distance_miles: f64,
    center: CenterItem,
}

/// Resolve the postal code, then rank every in-radius record by distance.
///
/// A resolution failure is surfaced distinctly from "no centers within
/// radius": the latter is a successful response with an empty result list.
pub(super) async fn search_centers(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<SearchRequest>,
) -> Response {
    if !body.radius_miles.is_finite() || body.radius_miles <= 0.0 {
        return ApiError::new(
            req_id.0,
            "validation_error",
            format!(
                "radius_miles must be a positive number, got {}",
                body.radius_miles
            ),
        )
        .into_response();
    }

    let capabilities: Vec<Capability> = match body
        .capabilities
        .iter()
        .map(|name| name.parse::<Capability>())
        .collect()
    {
        Ok(parsed) => parsed,
        Err(e) => {
            return ApiError::new(req_id.0, "validation_error", e.to_string()).into_response();
        }
    };

    // Every resolve may hit the remote geocoding tier, so every search call
    // pays the pacing toll before resolving.
    state.pacer.pace().await;

    let location = match state.resolver.resolve(&body.postal_code).await {
        Ok(location) => location,
        Err(e @ ResolveError::InvalidFormat { .. }) => {
            return ApiError::new(req_id.0, "validation_error", e.to_string()).into_response();
        }
        Err(ResolveError::NotFound { postal_code }) => {
            return ApiError::new(
                req_id.0,
                "not_found",
                format!("could not locate postal code {postal_code}"),
            )
            .into_response();
        }
    };

    let ranked = match carefind_search::search(
        &state.records,
        location.point,
        body.radius_miles,
        &capabilities,
    ) {
        Ok(ranked) => ranked,
        Err(e) => {
            return ApiError::new(req_id.0, "validation_error", e.to_string()).into_response();
        }
    };

    let results: Vec<SearchResultItem> = ranked
        .iter()
        .map(|result| SearchResultItem {
            distance_miles: result.distance_miles,
            center: CenterItem::from_record(result.record),
        })
        .collect();

    tracing::debug!(
        postal_code = %location.postal_code,
        radius_miles = body.radius_miles,
        matched = results.len(),
        "search request complete"
    );

    (
        StatusCode::OK,
        Json(ApiResponse {
            data: SearchData {
                location: ResolvedLocation {
                    postal_code: location.postal_code,
                    latitude: location.point.latitude,
                    longitude: location.point.longitude,
                    city: location.city,
                    region: location.region,
                },
                results,
            },
            meta: ResponseMeta::new(req_id.0),
        }),
    )
        .into_response()
}
