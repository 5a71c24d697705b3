use super::*;

fn sample_doctor() -> Doctor {
    Doctor {
        id: Uuid::new_v4(),
        first_name: "Louis".to_owned(),
        last_name: "Martin".to_owned(),
        specialty: "Cardiology".to_owned(),
        phone: None,
        email: Some("l.martin@clinic.example".to_owned()),
        license_number: Some("RPPS-1001".to_owned()),
    }
}

#[test]
fn cells_align_with_columns() {
    let doctor = sample_doctor();
    let cells = doctor.cells();
    assert_eq!(cells.len(), Doctor::columns().len());
    assert_eq!(cells[2], "Cardiology");
    assert_eq!(cells[3], "");
}

#[test]
fn specialty_is_required() {
    let form = FormValues::new().with("first_name", "Louis").with("last_name", "Martin");
    let errors = Doctor::parse_form(&form).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("specialty"), Some("Specialty is required"));
}

#[test]
fn from_payload_keeps_given_id() {
    let doctor = sample_doctor();
    let rebuilt = Doctor::from_payload(doctor.id, doctor.to_payload());
    assert_eq!(rebuilt, doctor);
}

#[test]
fn search_fields_include_specialty() {
    assert!(sample_doctor().search_fields().contains(&"Cardiology".to_owned()));
}
