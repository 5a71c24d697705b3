//! Landing page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home">
            <h1>"Clinic Admin"</h1>
            <p>"Manage patient and doctor records: search, edit, and export to a spreadsheet."</p>
            <div class="home__cards">
                <A href="/patients" attr:class="home__card">
                    <h2>"Patients"</h2>
                    <p>"Registered patients and their contact details."</p>
                </A>
                <A href="/doctors" attr:class="home__card">
                    <h2>"Doctors"</h2>
                    <p>"Practitioners, specialties, and license numbers."</p>
                </A>
            </div>
        </section>
    }
}
