//! Declarative field descriptors and the single rendering dispatch point.
//!
//! DESIGN
//! ======
//! Each field kind is a tagged variant carrying its own typed configuration,
//! so the form declares fields as data and exactly one `match` turns a
//! descriptor into markup. Field rules live in `util::validation`; this layer
//! only renders and reports.

#[cfg(test)]
#[path = "form_field_test.rs"]
mod form_field_test;

use leptos::prelude::*;

/// Rendering kind plus its per-kind configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text { placeholder: &'static str },
    Phone { placeholder: &'static str },
    Date,
    Select { placeholder: &'static str, options: &'static [&'static str] },
    Radio { options: &'static [&'static str] },
    Textarea { placeholder: &'static str },
}

impl FieldKind {
    /// BEM modifier for the field wrapper.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Text { .. } => "form-field--text",
            Self::Phone { .. } => "form-field--phone",
            Self::Date => "form-field--date",
            Self::Select { .. } => "form-field--select",
            Self::Radio { .. } => "form-field--radio",
            Self::Textarea { .. } => "form-field--textarea",
        }
    }

    /// HTML input type for the kinds rendered as `<input>`.
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            Self::Text { .. } => Some("text"),
            Self::Phone { .. } => Some("tel"),
            Self::Date => Some("date"),
            _ => None,
        }
    }
}

/// One field descriptor: wire name, label, and kind payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldConfig {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

/// Labeled form field dispatching on its descriptor, with inline error.
#[component]
pub fn FormField(
    config: FieldConfig,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let wrapper_class = format!("form-field {}", config.kind.css_class());

    let control = match config.kind {
        FieldKind::Text { placeholder } | FieldKind::Phone { placeholder } => view! {
            <input
                class="form-field__input"
                type=config.kind.input_type().unwrap_or("text")
                name=config.name
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::Date => view! {
            <input
                class="form-field__input"
                type="date"
                name=config.name
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::Select { placeholder, options } => view! {
            <select
                class="form-field__select"
                name=config.name
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                <option value="" disabled=true selected=move || value.get().is_empty()>
                    {placeholder}
                </option>
                {options
                    .iter()
                    .map(|option| {
                        let option = *option;
                        view! {
                            <option value=option selected=move || value.get() == option>
                                {option}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::Radio { options } => view! {
            <div class="form-field__radio-group">
                {options
                    .iter()
                    .map(|option| {
                        let option = *option;
                        view! {
                            <label class="form-field__radio-option">
                                <input
                                    type="radio"
                                    name=config.name
                                    value=option
                                    prop:checked=move || value.get() == option
                                    on:change=move |_| value.set(option.to_owned())
                                />
                                <span>{option}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        FieldKind::Textarea { placeholder } => view! {
            <textarea
                class="form-field__textarea"
                name=config.name
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
    };

    view! {
        <div class=wrapper_class>
            <label class="form-field__label" for=config.name>
                {config.label}
            </label>
            {control}
            <Show when=move || error.get().is_some()>
                <p class="form-field__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

/// Consent checkbox with its own boolean signal.
#[component]
pub fn ConsentCheckbox(
    name: &'static str,
    label: &'static str,
    checked: RwSignal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="form-field form-field--checkbox">
            <label class="form-field__checkbox-label">
                <input
                    type="checkbox"
                    name=name
                    prop:checked=move || checked.get()
                    on:change=move |_| checked.update(|v| *v = !*v)
                />
                <span>{label}</span>
            </label>
            <Show when=move || error.get().is_some()>
                <p class="form-field__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
