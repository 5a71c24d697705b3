use super::*;

#[test]
fn collection_endpoint_uses_collection_segment() {
    assert_eq!(collection_endpoint(RecordKind::Patients), "/api/patients");
    assert_eq!(collection_endpoint(RecordKind::Doctors), "/api/doctors");
}

#[test]
fn record_endpoint_appends_id() {
    let id = Uuid::from_u128(7);
    assert_eq!(
        record_endpoint(RecordKind::Doctors, id),
        "/api/doctors/00000000-0000-0000-0000-000000000007"
    );
}
