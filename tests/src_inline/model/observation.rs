use super::*;

#[test]
fn test_normalize_case_fold() {
    assert_eq!(normalize_name("JOHN SMITH"), "john smith");
    assert_eq!(normalize_name("John Smith"), "john smith");
}

#[test]
fn test_normalize_collapses_whitespace() {
    assert_eq!(normalize_name("  John   Smith "), "john smith");
    assert_eq!(normalize_name("John\tSmith"), "john smith");
}

#[test]
fn test_normalize_strips_punctuation() {
    assert_eq!(normalize_name("O'Brien, Liam Jr."), "obrien liam jr");
    assert_eq!(normalize_name("Smith-Jones"), "smithjones");
}

#[test]
fn test_key_equality_is_the_identity_rule() {
    let a = PlayerKey::new("John  Smith", 2026);
    let b = PlayerKey::new("john smith.", 2026);
    assert_eq!(a, b);
    let c = PlayerKey::new("John Smith", 2027);
    assert_ne!(a, c);
}

#[test]
fn test_observation_key() {
    let obs = RawObservation {
        player_name: "Casey O'Neil".to_string(),
        graduation_year: 2025,
        drill: Drill::LDrill,
        value: 7.31,
        observed_at: Some("2025-05-01T12:00:00".to_string()),
        source_record_id: None,
    };
    assert_eq!(obs.key(), PlayerKey::new("casey oneil", 2025));
}
