//! Item handlers

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use core_kernel::ItemId;
use domain_claims::{ContactExchange, ContactInfo};
use domain_item::{ItemQuery, PublicItemView};

use crate::extract::{AppJson, AppPath};
use crate::dto::claims::{ClaimResponse, SubmitClaimRequest};
use crate::dto::items::{CloseItemRequest, ItemQueryParams, ItemResponse, ReportItemRequest};
use crate::handlers::validated;
use crate::{error::ApiError, AppState};

/// Reports a lost, found or anonymous item
///
/// A finder's contact details, when given, are kept in the contact
/// directory until a claim is verified.
pub async fn report_item(
    State(state): State<AppState>,
    AppJson(request): AppJson<ReportItemRequest>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let request = validated(request)?;
    let contact = request
        .contact_email
        .clone()
        .map(|email| ContactInfo::new(email, request.contact_phone.clone()));

    let item = state.engine.report_item(request.into_new_item()?)?;

    if let (Some(contact), Some(finder)) = (contact, item.finder_id) {
        state.directory.register(finder, contact)?;
    }

    Ok((StatusCode::CREATED, Json(item.into())))
}

/// Lists items as the public sees them
pub async fn list_items(
    State(state): State<AppState>,
    Query(params): Query<ItemQueryParams>,
) -> Result<Json<Vec<PublicItemView>>, ApiError> {
    let query: ItemQuery = params.into();
    Ok(Json(state.engine.public_listing(&query)?))
}

/// Gets one item's public view
pub async fn get_item(
    State(state): State<AppState>,
    AppPath(id): AppPath<ItemId>,
) -> Result<Json<PublicItemView>, ApiError> {
    Ok(Json(state.engine.get_public_item(id)?))
}

/// Lists the claims on an item in submission order
pub async fn list_claims(
    State(state): State<AppState>,
    AppPath(id): AppPath<ItemId>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let claims = state.engine.get_claims(id)?;
    Ok(Json(claims.into_iter().map(ClaimResponse::from).collect()))
}

/// Submits an ownership claim
pub async fn submit_claim(
    State(state): State<AppState>,
    AppPath(id): AppPath<ItemId>,
    AppJson(request): AppJson<SubmitClaimRequest>,
) -> Result<(StatusCode, Json<ClaimResponse>), ApiError> {
    let (claimant, message) = validated(request)?.into_parts();
    let claim = state.engine.submit_claim(id, claimant, message)?;
    Ok((StatusCode::CREATED, Json(claim.into())))
}

/// Finder confirms handover to the verified owner
pub async fn confirm_handover(
    State(state): State<AppState>,
    AppPath(id): AppPath<ItemId>,
) -> Result<Json<ItemResponse>, ApiError> {
    Ok(Json(state.engine.confirm_handover(id)?.into()))
}

/// Owner confirms the item arrived
pub async fn confirm_recovery(
    State(state): State<AppState>,
    AppPath(id): AppPath<ItemId>,
) -> Result<Json<ItemResponse>, ApiError> {
    Ok(Json(state.engine.confirm_recovery(id)?.into()))
}

/// Closes an item administratively
///
/// The reason body is optional; an empty body closes without one, but a
/// body that is present must parse. Responds with the public view, so an
/// anonymous item closed before verification stays redacted.
pub async fn close_item(
    State(state): State<AppState>,
    AppPath(id): AppPath<ItemId>,
    body: Bytes,
) -> Result<Json<PublicItemView>, ApiError> {
    let reason = if body.iter().all(u8::is_ascii_whitespace) {
        None
    } else {
        let Json(request) = Json::<CloseItemRequest>::from_bytes(&body)?;
        request.reason
    };

    state.engine.close_item(id, reason)?;
    Ok(Json(state.engine.get_public_item(id)?))
}

/// Contact details exchanged for the item's verified claim
pub async fn contact_exchange(
    State(state): State<AppState>,
    AppPath(id): AppPath<ItemId>,
) -> Result<Json<ContactExchange>, ApiError> {
    Ok(Json(state.engine.contact_exchange(id)?))
}
