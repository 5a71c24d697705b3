//! Doctors route.

use leptos::prelude::*;
use records::Doctor;

use crate::components::record_screen::RecordScreen;

#[component]
pub fn DoctorsPage() -> impl IntoView {
    view! { <RecordScreen<Doctor>/> }
}
