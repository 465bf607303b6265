//! Color-scheme host with two-phase activation.
//!
//! Phase 1 renders nothing until a post-mount effect confirms the client
//! environment is ready; phase 2 applies the scheme and renders the themed
//! subtree. This keeps a server-guessed scheme from flashing before the
//! client resolves the real one. Defaults to dark; system-preference
//! adaptation stays off (see `util::theme`).

use leptos::prelude::*;

use crate::util::theme::{self, Scheme};

#[component]
pub fn ThemeHost(
    #[prop(optional)] scheme: Option<Scheme>,
    children: ChildrenFn,
) -> impl IntoView {
    let ready = RwSignal::new(false);
    let resolved = theme::resolve(scheme);

    // Effects only run client-side, so `ready` flips after the first
    // rendering pass and never on the server.
    Effect::new(move || {
        theme::apply(resolved);
        ready.set(true);
    });

    view! { <Show when=move || ready.get()>{children()}</Show> }
}
