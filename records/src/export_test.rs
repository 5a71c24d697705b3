use super::*;
use crate::filter::filter_records;
use crate::patient::Patient;
use uuid::Uuid;

fn patient(n: u128, first: &str, last: &str) -> Patient {
    Patient {
        id: Uuid::from_u128(n),
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        date_of_birth: None,
        gender: None,
        phone: None,
        email: None,
        address: Some("12 rue de la Paix, Paris".to_owned()),
    }
}

fn read_rows(bytes: &[u8]) -> Vec<Vec<String>> {
    let body = bytes.strip_prefix(UTF8_BOM).expect("bom prefix");
    let mut reader = csv::ReaderBuilder::new().has_headers(false).from_reader(body);
    reader
        .records()
        .map(|r| r.expect("row").iter().map(str::to_owned).collect())
        .collect()
}

#[test]
fn header_row_uses_column_labels() {
    let bytes = to_csv::<Patient, _>(std::iter::empty()).unwrap();
    let rows = read_rows(&bytes);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "Last name");
    assert_eq!(rows[0].len(), Patient::columns().len());
}

#[test]
fn row_count_matches_displayed_records() {
    let records = vec![patient(1, "Jeanne", "Dupont"), patient(2, "Paul", "Martin")];
    let visible = filter_records(&records, "dup");
    let bytes = to_csv(visible.iter().copied()).unwrap();
    let rows = read_rows(&bytes);
    assert_eq!(rows.len() - 1, visible.len());
    assert_eq!(rows[1][0], "Dupont");
}

#[test]
fn fields_with_commas_are_quoted() {
    let records = vec![patient(1, "Jeanne", "Dupont")];
    let bytes = to_csv(&records).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.contains("\"12 rue de la Paix, Paris\""));
    assert_eq!(read_rows(text.as_bytes())[1][6], "12 rue de la Paix, Paris");
}

#[test]
fn export_filename_uses_collection_and_date() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    assert_eq!(export_filename(RecordKind::Patients, date), "patients-2024-03-01.csv");
    assert_eq!(export_filename(RecordKind::Doctors, date), "doctors-2024-03-01.csv");
}

#[test]
fn formula_like_cells_are_exported_as_text() {
    let mut evil = patient(1, "=HYPERLINK(\"http://evil\",\"x\")", "Dupont");
    evil.phone = Some("+33 1 23 45 67 89".to_owned());
    evil.email = Some("@cmd".to_owned());
    evil.address = Some("-2+3".to_owned());
    let rows = read_rows(&to_csv(&[evil]).unwrap());
    assert_eq!(rows[1][1], "'=HYPERLINK(\"http://evil\",\"x\")");
    assert_eq!(rows[1][4], "'+33 1 23 45 67 89");
    assert_eq!(rows[1][5], "'@cmd");
    assert_eq!(rows[1][6], "'-2+3");
    for cell in &rows[1] {
        assert!(!cell.starts_with(['=', '+', '-', '@']), "cell {cell:?}");
    }
}

#[test]
fn plain_cells_are_unchanged() {
    let rows = read_rows(&to_csv(&[patient(1, "Jeanne", "Dupont")]).unwrap());
    assert_eq!(rows[1][0], "Dupont");
    assert_eq!(rows[1][1], "Jeanne");
}
