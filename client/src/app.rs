//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::layout_shell::LayoutShell;
use crate::pages::{doctors::DoctorsPage, home::HomePage, not_found::NotFoundPage, patients::PatientsPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Every route renders inside `LayoutShell`; record screens own their state,
/// so no contexts are provided here.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/clinic-admin.css"/>
        <Title text="Clinic Admin"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <ParentRoute path=StaticSegment("") view=LayoutShell>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("patients") view=PatientsPage/>
                    <Route path=StaticSegment("doctors") view=DoctorsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
