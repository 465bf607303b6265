//! Drag-and-drop capture for the identification document.
//!
//! DESIGN
//! ======
//! The component holds no file state: every drop or picker selection raises
//! the newly accepted list through `on_change` and the call site overwrites
//! whatever it held before. Only the first file is previewed; the prompt text
//! about formats and size is descriptive, nothing is enforced here.

#[cfg(test)]
#[path = "document_uploader_test.rs"]
mod document_uploader_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;

use crate::net::types::UploadedFile;

/// The file shown in the preview: always the first of the accepted list.
pub fn preview_file(files: &[UploadedFile]) -> Option<&UploadedFile> {
    files.first()
}

#[cfg(feature = "hydrate")]
fn files_from_list(list: &web_sys::FileList) -> Vec<UploadedFile> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|file| UploadedFile::from_file(&file))
        .collect()
}

/// Upload zone: click opens the picker, drop accepts dragged files.
#[component]
pub fn DocumentUploader(
    #[prop(into)] files: Signal<Vec<UploadedFile>>,
    #[prop(into)] on_change: Callback<Vec<UploadedFile>>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_zone_click = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_input_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let accepted = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .map(|list| files_from_list(&list))
                .unwrap_or_default();
            on_change.run(accepted);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &ev;
        }
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let accepted = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .map(|list| files_from_list(&list))
                .unwrap_or_default();
            on_change.run(accepted);
        }
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| ev.prevent_default();

    view! {
        <div
            class="file-upload"
            on:click=on_zone_click
            on:drop=on_drop
            on:dragover=on_drag_over
        >
            <input
                class="file-upload__input"
                type="file"
                accept="image/*"
                node_ref=input_ref
                on:change=on_input_change
            />
            <Show
                when=move || !files.get().is_empty()
                fallback=|| {
                    view! {
                        <div class="file-upload__prompt">
                            <p>
                                <span class="file-upload__prompt-action">"Click to upload"</span>
                                " or drag and drop"
                            </p>
                            <p class="file-upload__prompt-hint">"SVG, PNG, JPG or Gif (max 800x400)"</p>
                        </div>
                    }
                }
            >
                {move || {
                    let files = files.get();
                    preview_file(&files)
                        .map(|file| {
                            view! {
                                <img
                                    class="file-upload__preview"
                                    src=file.preview_url.clone()
                                    alt=file.file_name.clone()
                                />
                            }
                        })
                }}
            </Show>
        </div>
    }
}
