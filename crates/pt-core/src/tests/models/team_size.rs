use crate::TeamSize;

use std::str::FromStr;

#[test]
fn test_every_allowed_value_round_trips() {
    for value in TeamSize::ALLOWED {
        let parsed = TeamSize::from_str(value).unwrap();
        assert_eq!(parsed.as_str(), value);
    }
}

#[test]
fn test_invalid_value_is_rejected() {
    assert!(TeamSize::from_str("0").is_err());
    assert!(TeamSize::from_str("5").is_err());
    assert!(TeamSize::from_str("five").is_err());
}

#[test]
fn test_serde_uses_wire_strings() {
    let json = serde_json::to_string(&TeamSize::FivePlus).unwrap();
    assert_eq!(json, "\"5+\"");

    let parsed: TeamSize = serde_json::from_str("\"2\"").unwrap();
    assert_eq!(parsed, TeamSize::Two);
}
