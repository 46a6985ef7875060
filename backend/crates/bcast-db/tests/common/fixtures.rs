use bcast_core::{RecipientId, RecipientProfile};

/// Creates a profile with every optional field filled in
pub fn create_test_profile(id: i64) -> RecipientProfile {
    RecipientProfile {
        id: RecipientId(id),
        username: Some(format!("user{id}")),
        first_name: Some("Test".to_string()),
        last_name: Some("Recipient".to_string()),
    }
}
