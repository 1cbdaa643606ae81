#![cfg(feature = "serde")]

use railway::Outcome;

#[test]
fn test_outcome_is_externally_tagged() {
    let ok: Outcome<u32, String> = Outcome::Success(3);
    let err: Outcome<u32, String> = Outcome::Failure("locked".into());

    assert_eq!(serde_json::to_string(&ok).unwrap(), r#"{"Success":3}"#);
    assert_eq!(serde_json::to_string(&err).unwrap(), r#"{"Failure":"locked"}"#);
}

#[test]
fn test_outcome_deserializes() {
    let parsed: Outcome<Vec<u8>, String> = serde_json::from_str(r#"{"Success":[1,2]}"#).unwrap();
    assert_eq!(parsed, Outcome::Success(vec![1, 2]));

    let rejected = serde_json::from_str::<Outcome<u8, String>>(r#"{"Pending":1}"#);
    assert!(rejected.is_err());
}
