use crate::MoodEntry;

use serde_json::json;

fn entry_json() -> serde_json::Value {
    json!({
        "id": 7,
        "text_input": "I had a long but rewarding day at work",
        "mood_label": "content",
        "created_at": "2025-03-01T18:30:00",
        "user_id": 1,
        "suggestions": [
            {"id": 1, "suggestion_type": "color", "content": "#FFAA00, #00AAFF ,#123456", "mood_entry_id": 7},
            {"id": 2, "suggestion_type": "music", "content": "https://open.spotify.com/playlist/abc", "mood_entry_id": 7},
            {"id": 3, "suggestion_type": "quote", "content": "Keep going.", "mood_entry_id": 7}
        ]
    })
}

#[test]
fn given_naive_timestamp_when_deserialized_then_treated_as_utc() {
    let entry: MoodEntry = serde_json::from_value(entry_json()).unwrap();

    assert_eq!(entry.created_at.to_rfc3339(), "2025-03-01T18:30:00+00:00");
}

#[test]
fn given_color_suggestion_when_colors_then_split_and_trimmed() {
    let entry: MoodEntry = serde_json::from_value(entry_json()).unwrap();

    assert_eq!(entry.colors(), vec!["#FFAA00", "#00AAFF", "#123456"]);
}

#[test]
fn given_suggestions_when_accessors_called_then_first_match_returned() {
    let entry: MoodEntry = serde_json::from_value(entry_json()).unwrap();

    assert_eq!(entry.quote(), Some("Keep going."));
    assert_eq!(
        entry.music_link(),
        Some("https://open.spotify.com/playlist/abc")
    );
}

#[test]
fn given_no_suggestions_when_accessors_called_then_empty() {
    let mut value = entry_json();
    value["suggestions"] = json!([]);
    let entry: MoodEntry = serde_json::from_value(value).unwrap();

    assert!(entry.quote().is_none());
    assert!(entry.colors().is_empty());
}
