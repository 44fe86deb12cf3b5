//! Item DTOs

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{ItemId, ParticipantId};
use domain_item::{
    Item, ItemDetails, ItemQuery, ItemStatus, ItemType, MatchScore, NewItem, StatusBadge,
};

use crate::error::ApiError;

#[derive(Debug, Deserialize, Validate)]
pub struct ReportItemRequest {
    pub item_type: ItemType,
    pub reporter_id: ParticipantId,
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    #[validate(length(min = 1, max = 2000))]
    pub description: String,
    pub brand: Option<String>,
    pub color: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub location: String,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub image: Option<String>,
    /// Similarity percentage from an external matcher, 0-100
    pub match_score: Option<Decimal>,
    /// Finder's contact details, shared once a claim is verified
    #[validate(email)]
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

impl ReportItemRequest {
    pub fn into_new_item(self) -> Result<NewItem, ApiError> {
        let match_score = self
            .match_score
            .map(MatchScore::from_percent)
            .transpose()
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        Ok(NewItem {
            item_type: self.item_type,
            details: ItemDetails {
                category: self.category,
                description: self.description,
                brand: self.brand,
                color: self.color,
                location: self.location,
                date: self.date,
                time: self.time,
                image: self.image,
            },
            reporter: self.reporter_id,
            match_score,
        })
    }
}

/// Filters accepted by `GET /api/v1/items`
#[derive(Debug, Default, Deserialize)]
pub struct ItemQueryParams {
    pub item_type: Option<ItemType>,
    pub status: Option<ItemStatus>,
    pub category: Option<String>,
    pub participant: Option<ParticipantId>,
    pub q: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl From<ItemQueryParams> for ItemQuery {
    fn from(params: ItemQueryParams) -> Self {
        ItemQuery {
            item_type: params.item_type,
            status: params.status,
            category: params.category,
            participant: params.participant,
            search: params.q,
            limit: params.limit,
            offset: params.offset,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CloseItemRequest {
    pub reason: Option<String>,
}

/// Full item record, returned to the parties acting on it
#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: ItemId,
    pub item_type: ItemType,
    pub status: ItemStatus,
    pub badge: StatusBadge,
    #[serde(flatten)]
    pub details: ItemDetails,
    pub owner_id: Option<ParticipantId>,
    pub finder_id: Option<ParticipantId>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub match_score: Option<MatchScore>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id(),
            item_type: item.item_type(),
            status: item.status(),
            badge: StatusBadge::for_status(item.status()),
            details: item.details().clone(),
            owner_id: item.owner_id,
            finder_id: item.finder_id,
            contact_email: item.contact_email,
            contact_phone: item.contact_phone,
            match_score: item.match_score,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
