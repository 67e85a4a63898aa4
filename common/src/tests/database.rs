use crate::database::Ulid;

#[test]
fn test_ulid_uuid_round_trip() {
    let id = Ulid::new();

    let uuid: uuid::Uuid = id.into();
    assert_eq!(Ulid::from(uuid), id);
}

#[test]
fn test_ulid_string_round_trip() {
    let id = Ulid::new();

    let parsed: Ulid = id.to_string().parse().expect("failed to parse ulid");
    assert_eq!(parsed, id);
}

#[test]
fn test_ulid_default_is_nil() {
    assert!(Ulid::default().is_nil());
    assert!(!Ulid::new().is_nil());
}
