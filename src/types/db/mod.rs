// Database entities - SeaORM models
pub mod item;
pub mod notification;
pub mod rating;
pub mod request;

#[cfg(test)]
mod tests {
    use super::item::ItemStatus;
    use super::request::{PreferredContact, RequestStatus};

    #[test]
    fn item_status_serde_round_trip_is_exact() {
        for (status, name) in [
            (ItemStatus::Available, "\"Available\""),
            (ItemStatus::Reserved, "\"Reserved\""),
            (ItemStatus::Collected, "\"Collected\""),
            (ItemStatus::Expired, "\"Expired\""),
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, name);
            let back: ItemStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn request_status_serde_round_trip_is_exact() {
        for (status, name) in [
            (RequestStatus::Pending, "\"Pending\""),
            (RequestStatus::Approved, "\"Approved\""),
            (RequestStatus::Rejected, "\"Rejected\""),
            (RequestStatus::Completed, "\"Completed\""),
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, name);
            let back: RequestStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn legacy_status_spellings_are_not_accepted() {
        // "Requested" and "Taken" are handled by the normalization migration,
        // not by the enum itself.
        assert!(serde_json::from_str::<ItemStatus>("\"Requested\"").is_err());
        assert!(serde_json::from_str::<ItemStatus>("\"Taken\"").is_err());
    }

    #[test]
    fn preferred_contact_uses_lowercase_wire_values() {
        assert_eq!(serde_json::to_string(&PreferredContact::Email).unwrap(), "\"email\"");
        assert_eq!(serde_json::to_string(&PreferredContact::Phone).unwrap(), "\"phone\"");
    }

    #[test]
    fn transition_edges_match_the_state_machine() {
        use RequestStatus::*;
        assert!(Pending.can_transition_to(Approved));
        assert!(Pending.can_transition_to(Rejected));
        assert!(!Pending.can_transition_to(Completed));
        assert!(Approved.can_transition_to(Completed));
        assert!(Approved.can_transition_to(Rejected));
        assert!(!Approved.can_transition_to(Approved));
        for terminal in [Rejected, Completed] {
            assert!(terminal.is_terminal());
            for next in [Pending, Approved, Rejected, Completed] {
                assert!(!terminal.can_transition_to(next));
            }
        }
    }
}
