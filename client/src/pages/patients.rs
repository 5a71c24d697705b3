//! Patients route.

use leptos::prelude::*;
use records::Patient;

use crate::components::record_screen::RecordScreen;

#[component]
pub fn PatientsPage() -> impl IntoView {
    view! { <RecordScreen<Patient>/> }
}
