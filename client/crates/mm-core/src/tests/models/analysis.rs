use crate::{AnalysisRequest, AnalysisResponse};

use serde_json::json;

#[test]
fn given_no_emoji_when_request_serialized_then_field_omitted() {
    let request = AnalysisRequest {
        text_input: "feeling calm after a walk in the park".to_string(),
        emoji: None,
    };

    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(
        value,
        json!({"text_input": "feeling calm after a walk in the park"})
    );
}

#[test]
fn given_canonical_response_when_deserialized_then_ok() {
    let response: AnalysisResponse = serde_json::from_value(json!({
        "mood_entry_id": 12,
        "color_palette": ["#111111", "#222222"],
        "spotify_playlist": "https://open.spotify.com/playlist/xyz",
        "inspirational_quote": "Breathe."
    }))
    .unwrap();

    assert_eq!(response.mood_entry_id, 12);
    assert_eq!(response.color_palette.len(), 2);
}

#[test]
fn given_legacy_spotify_url_shape_when_deserialized_then_rejected() {
    let result = serde_json::from_value::<AnalysisResponse>(json!({
        "color_palette": ["#111111"],
        "spotify_url": "https://open.spotify.com/playlist/xyz",
        "inspirational_quote": "Breathe."
    }));

    assert!(result.is_err());
}
