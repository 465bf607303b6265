//! Public landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <div class="home-page__card">
                <h1>"CareIntake"</h1>
                <p class="home-page__subtitle">"Patient registration, simplified."</p>
                <a class="btn btn--primary" href="/register">
                    "Start registration"
                </a>
                <a class="home-page__admin-link" href="/admin">
                    "Admin"
                </a>
            </div>
        </main>
    }
}
