//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::theme_host::ThemeHost;
use crate::pages::{
    admin::AdminPage, home::HomePage, new_appointment::NewAppointmentPage, register::RegisterPage,
};
use crate::state::session::SessionState;

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
/// Provides the session context and sets up client-side routing inside the
/// theme host, so every route renders under the resolved color scheme.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The session context is the single cross-route consumer of the
    // admin-unlock flag; routes never read browser storage directly.
    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/intake-client.css"/>
        <Title text="CareIntake"/>

        <ThemeHost>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                    <Route
                        path=(
                            StaticSegment("patients"),
                            ParamSegment("id"),
                            StaticSegment("new-appointment"),
                        )
                        view=NewAppointmentPage
                    />
                </Routes>
            </Router>
        </ThemeHost>
    }
}
