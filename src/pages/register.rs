//! Registration page: fetches the authenticated user, then renders the form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Identity comes from the upstream auth step via `/api/auth/me`; the form
//! never collects credentials itself.

use leptos::prelude::*;

use crate::components::intake_form::IntakeForm;
use crate::net::types::User;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let user = RwSignal::new(None::<User>);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            if let Some(current) = crate::net::api::fetch_current_user().await {
                user.set(Some(current));
            }
        });
    }

    view! {
        <main class="register-page">
            <section class="register-page__intro">
                <h1>"Welcome 👋"</h1>
                <p>"Let us know more about yourself."</p>
            </section>
            <Show
                when=move || user.get().is_some()
                fallback=|| view! { <p class="register-page__loading">"Loading your details..."</p> }
            >
                {move || user.get().map(|current| view! { <IntakeForm user=current/> })}
            </Show>
        </main>
    }
}
