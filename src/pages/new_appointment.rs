//! Post-registration results route.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn NewAppointmentPage() -> impl IntoView {
    let params = use_params_map();
    let user_id = move || params.with(|p| p.get("id").unwrap_or_default());

    view! {
        <main class="appointment-page">
            <h1>"Registration complete"</h1>
            <p>
                "You're all set. Book your first appointment below."
            </p>
            <p class="appointment-page__user">{user_id}</p>
        </main>
    }
}
