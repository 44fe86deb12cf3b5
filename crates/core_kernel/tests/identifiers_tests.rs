//! Unit tests for the Identifiers module
//!
//! Tests cover creation, parsing, conversion, and display formatting
//! for every identifier type.

use core_kernel::{ItemId, ClaimRequestId, ParticipantId, QuestionId, NotificationId};
use uuid::Uuid;

mod item_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = ItemId::new();
        let id2 = ItemId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_new_v7_generates_time_ordered_ids() {
        let id1 = ItemId::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let id2 = ItemId::new_v7();
        let uuid1: Uuid = id1.into();
        let uuid2: Uuid = id2.into();
        assert!(uuid1 < uuid2);
    }

    #[test]
    fn test_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = ItemId::from_uuid(uuid);
        assert_eq!(*id.as_uuid(), uuid);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(ItemId::prefix(), "ITM");
    }

    #[test]
    fn test_from_str_with_prefix() {
        let original = ItemId::new();
        let parsed: ItemId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_from_str_without_prefix() {
        let uuid = Uuid::new_v4();
        let parsed: ItemId = uuid.to_string().parse().unwrap();
        assert_eq!(*parsed.as_uuid(), uuid);
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("ITM-not-a-uuid".parse::<ItemId>().is_err());
        assert!("".parse::<ItemId>().is_err());
    }

    #[test]
    fn test_serializes_as_bare_uuid() {
        let id = ItemId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));

        let back: ItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_deserializes_prefixed_form() {
        let id = ItemId::new();
        let back: ItemId = serde_json::from_str(&format!("\"{}\"", id)).unwrap();
        assert_eq!(id, back);

        let err = serde_json::from_str::<ItemId>("\"ITM-garbage\"").unwrap_err();
        assert!(err.to_string().contains("not a valid item id"));
    }
}

mod prefix_tests {
    use super::*;

    #[test]
    fn test_all_prefixes() {
        assert_eq!(ClaimRequestId::prefix(), "CLM");
        assert_eq!(ParticipantId::prefix(), "PTC");
        assert_eq!(QuestionId::prefix(), "QST");
        assert_eq!(NotificationId::prefix(), "NTF");
    }

    #[test]
    fn test_display_uses_prefix() {
        assert!(ClaimRequestId::new().to_string().starts_with("CLM-"));
        assert!(ParticipantId::new().to_string().starts_with("PTC-"));
        assert!(QuestionId::new().to_string().starts_with("QST-"));
        assert!(NotificationId::new().to_string().starts_with("NTF-"));
    }

    #[test]
    fn test_foreign_prefix_is_rejected() {
        // A claim id string is not silently accepted as an item id
        let claim = ClaimRequestId::new().to_string();
        assert!(claim.parse::<ItemId>().is_err());
    }
}

mod hashing_tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_usable_as_keys() {
        let mut set = HashSet::new();
        let id = ParticipantId::new();
        set.insert(id);
        set.insert(id);
        set.insert(ParticipantId::new());
        assert_eq!(set.len(), 2);
    }
}
