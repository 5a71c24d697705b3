//! Persistent sidebar navigation.
//!
//! The router's `A` component marks the active link with
//! `aria-current="page"`, which the stylesheet highlights.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::components::A;
use records::RecordKind;

/// One sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub href: String,
    pub label: &'static str,
    /// Only highlight on an exact path match.
    pub exact: bool,
}

/// Sidebar entries in display order: home, then one per record collection.
pub fn nav_items() -> Vec<NavItem> {
    let mut items = vec![NavItem { href: "/".to_owned(), label: "Home", exact: true }];
    items.extend([RecordKind::Patients, RecordKind::Doctors].into_iter().map(|kind| NavItem {
        href: format!("/{}", kind.collection()),
        label: kind.title(),
        exact: false,
    }));
    items
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let links = nav_items()
        .into_iter()
        .map(|item| {
            view! {
                <li class="sidebar__item">
                    <A href=item.href exact=item.exact>
                        {item.label}
                    </A>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav class="sidebar" aria-label="Main navigation">
            <div class="sidebar__brand">"Clinic Admin"</div>
            <ul class="sidebar__links">{links}</ul>
        </nav>
    }
}
