//! Application layout: sidebar plus the routed content region.
//!
//! ARCHITECTURE
//! ============
//! Mounted once as the parent route; child routes render into the `Outlet`,
//! so navigation swaps only the content area and the sidebar stays resident.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::sidebar::Sidebar;

#[component]
pub fn LayoutShell() -> impl IntoView {
    view! {
        <div class="layout">
            <Sidebar/>
            <main class="layout__content">
                <Outlet/>
            </main>
        </div>
    }
}
