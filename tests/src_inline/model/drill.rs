use std::collections::BTreeMap;

use super::*;

#[test]
fn test_direction_table() {
    assert_eq!(Drill::SixtyYard.direction(), Direction::LowerIsBetter);
    assert_eq!(Drill::ThirtyYard.direction(), Direction::LowerIsBetter);
    assert_eq!(Drill::LDrill.direction(), Direction::LowerIsBetter);
    assert_eq!(Drill::BroadJump.direction(), Direction::HigherIsBetter);
    assert_eq!(Drill::MedBall.direction(), Direction::HigherIsBetter);
}

#[test]
fn test_column_round_trip() {
    for drill in Drill::ALL {
        assert_eq!(Drill::from_column(drill.column()), Some(drill));
    }
    assert_eq!(Drill::from_column("60_pct"), None);
    assert_eq!(Drill::from_column(""), None);
}

#[test]
fn test_worse_or_equal_respects_direction() {
    assert!(Drill::SixtyYard.worse_or_equal(7.5, 7.0));
    assert!(Drill::SixtyYard.worse_or_equal(7.0, 7.0));
    assert!(!Drill::SixtyYard.worse_or_equal(6.8, 7.0));
    assert!(Drill::BroadJump.worse_or_equal(96.0, 102.0));
    assert!(Drill::BroadJump.worse_or_equal(102.0, 102.0));
    assert!(!Drill::BroadJump.worse_or_equal(104.0, 102.0));
}

#[test]
fn test_epsilon_per_unit() {
    assert_eq!(Drill::SixtyYard.epsilon(), 0.005);
    assert_eq!(Drill::LDrill.epsilon(), 0.005);
    assert_eq!(Drill::BroadJump.epsilon(), 0.05);
}

#[test]
fn test_serde_snake_case_map_keys() {
    let mut map = BTreeMap::new();
    map.insert(Drill::SixtyYard, 7.2f64);
    map.insert(Drill::MedBall, 31.5f64);
    let json = serde_json::to_string(&map).unwrap();
    assert!(json.contains("\"sixty_yard\""));
    assert!(json.contains("\"med_ball\""));
    let back: BTreeMap<Drill, f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, map);
}
