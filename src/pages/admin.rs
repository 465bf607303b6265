//! Admin route, gated behind the passkey modal.
//!
//! The page always mounts `AccessGate`; the content renders only once the
//! session context reports the gate unlocked.

use leptos::prelude::*;

use crate::components::access_gate::AccessGate;
use crate::state::session::SessionState;

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <main class="admin-page">
            <AccessGate/>
            <Show when=move || session.get().admin_unlocked>
                <section class="admin-page__content">
                    <h1>"Admin"</h1>
                    <p>"Manage new registrations and appointments."</p>
                </section>
            </Show>
        </main>
    }
}
