use records::{Doctor, Patient};

use super::*;

#[test]
fn props_build_without_arguments_for_each_record_type() {
    let patients: RecordScreenProps<Patient> = RecordScreenProps::builder().build();
    let doctors: RecordScreenProps<Doctor> = RecordScreenProps::builder().build();
    assert_eq!(patients._marker, PhantomData);
    assert_eq!(doctors._marker, PhantomData);
}
