use crate::SuggestionType;

use std::str::FromStr;

#[test]
fn test_suggestion_type_as_str() {
    assert_eq!(SuggestionType::Color.as_str(), "color");
    assert_eq!(SuggestionType::Music.as_str(), "music");
    assert_eq!(SuggestionType::Quote.as_str(), "quote");
}

#[test]
fn test_suggestion_type_from_str() {
    assert_eq!(
        SuggestionType::from_str("music").unwrap(),
        SuggestionType::Music
    );
    assert!(SuggestionType::from_str("podcast").is_err());
}

#[test]
fn test_unknown_suggestion_type_deserializes_as_other() {
    let kind: SuggestionType = serde_json::from_str("\"podcast\"").unwrap();
    assert_eq!(kind, SuggestionType::Other);
}
