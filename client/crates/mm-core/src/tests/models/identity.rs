use crate::Identity;

use serde_json::json;

#[test]
fn given_full_user_record_when_deserialized_then_fields_mapped() {
    let identity: Identity = serde_json::from_value(json!({
        "id": 1,
        "username": "joe",
        "email": "joe@example.com",
        "created_at": "2025-01-02T03:04:05.123456+00:00",
        "profile_image_url": "/static/profile_images/1.png",
        "mood_entries": []
    }))
    .unwrap();

    assert_eq!(identity.id, 1);
    assert_eq!(identity.username, "joe");
    assert_eq!(identity.email.as_deref(), Some("joe@example.com"));
    assert!(identity.created_at.is_some());
    assert_eq!(
        identity.profile_image_url.as_deref(),
        Some("/static/profile_images/1.png")
    );
}

#[test]
fn given_minimal_user_record_when_deserialized_then_optionals_are_none() {
    let identity: Identity = serde_json::from_value(json!({"id": 1, "username": "joe"})).unwrap();

    assert_eq!(identity, Identity::from_claims(1, "joe", None));
}
