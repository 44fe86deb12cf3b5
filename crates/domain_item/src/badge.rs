//! Status badge presentation

use serde::{Deserialize, Serialize};

use crate::item::ItemStatus;

/// Colour family of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Secondary,
    Warning,
    Primary,
    Accent,
    Muted,
}

/// How a status is rendered in listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: &'static str,
    pub icon: &'static str,
    pub tone: BadgeTone,
}

impl StatusBadge {
    pub fn for_status(status: ItemStatus) -> Self {
        let (icon, tone) = match status {
            ItemStatus::Active => ("search", BadgeTone::Secondary),
            ItemStatus::VerificationPending => ("clock", BadgeTone::Warning),
            ItemStatus::ItemOnItsWay => ("truck", BadgeTone::Primary),
            ItemStatus::Recovered => ("check-circle", BadgeTone::Accent),
            ItemStatus::Closed => ("shield", BadgeTone::Muted),
        };

        Self {
            label: status.label(),
            icon,
            tone,
        }
    }
}
