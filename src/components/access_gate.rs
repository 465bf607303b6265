//! Passkey modal guarding the admin route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Transitions live in `state::gate`; this component owns the signals and the
//! side effects: reading/writing the session token and redirecting on
//! dismissal. Verification is local — the expected secret is a build-time
//! value and no server round-trip is involved.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::constants::admin_passkey;
use crate::state::gate::{
    DISMISS_ROUTE, GateStatus, INVALID_PASSKEY_MESSAGE, PROTECTED_ROUTE, evaluate_stored,
    verify_passkey,
};
use crate::state::session::{SessionState, store_access_token, stored_access_token};
use crate::util::passkey::{PASSKEY_LEN, normalize_input};

/// Modal gating the admin route behind a 6-character passkey.
#[component]
pub fn AccessGate() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let open = RwSignal::new(true);
    let passkey = RwSignal::new(String::new());
    let status = RwSignal::new(GateStatus::Locked);

    // Route evaluation: a matching stored token unlocks without re-prompting.
    let navigate_admin = navigate.clone();
    Effect::new(move || {
        let evaluated = evaluate_stored(stored_access_token().as_deref(), admin_passkey());
        status.set(evaluated);
        if evaluated.is_unlocked() {
            session.update(|s| s.admin_unlocked = true);
            open.set(false);
            navigate_admin(PROTECTED_ROUTE, NavigateOptions::default());
        } else {
            open.set(true);
        }
    });

    let on_confirm = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        status.set(GateStatus::Checking);
        match verify_passkey(&passkey.get(), admin_passkey()) {
            Some(token) => {
                store_access_token(&token);
                status.set(GateStatus::Unlocked);
                session.update(|s| s.admin_unlocked = true);
                open.set(false);
            }
            None => status.set(GateStatus::Denied),
        }
    };

    // Dismissal while locked leads back to the public landing route.
    let on_dismiss = move |_: leptos::ev::MouseEvent| {
        open.set(false);
        navigate(DISMISS_ROUTE, NavigateOptions::default());
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop">
                <div class="dialog dialog--access-gate" on:click=move |ev| ev.stop_propagation()>
                    <div class="dialog__header">
                        <h2>"Admin Access Verification"</h2>
                        <button
                            class="dialog__close"
                            on:click=on_dismiss.clone()
                            title="Close"
                            aria-label="Close"
                        >
                            "✕"
                        </button>
                    </div>
                    <p class="dialog__description">
                        "To access the admin page, please enter the passkey."
                    </p>

                    <input
                        class="dialog__passkey-input"
                        type="text"
                        inputmode="numeric"
                        maxlength=PASSKEY_LEN.to_string()
                        placeholder="••••••"
                        prop:value=move || passkey.get()
                        on:input=move |ev| passkey.set(normalize_input(&event_target_value(&ev)))
                    />

                    <Show when=move || status.get() == GateStatus::Denied>
                        <p class="dialog__error">{INVALID_PASSKEY_MESSAGE}</p>
                    </Show>

                    <div class="dialog__actions">
                        <button class="btn btn--primary" on:click=on_confirm>
                            "Enter Admin Passkey"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
