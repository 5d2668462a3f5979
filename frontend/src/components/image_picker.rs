//! Image selection with removable thumbnails.

use leptos::*;
use web_sys::{Event, File, HtmlInputElement};

use crate::services::{encode_batch, AlertNotifier, Notifier};
use crate::state::Gallery;
use crate::types::Notice;
use crate::{ACCEPTED_IMAGE_TYPES, PAYLOAD_FORMAT};

#[component]
pub fn ImagePicker(gallery: RwSignal<Gallery>) -> impl IntoView {
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);

        let files: Vec<File> = input
            .files()
            .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
            .unwrap_or_default();
        // allow picking the same file again
        input.set_value("");

        if files.is_empty() {
            return;
        }

        let generation = gallery.with_untracked(Gallery::generation);

        spawn_local(async move {
            match encode_batch(&files, PAYLOAD_FORMAT).await {
                Ok(batch) => {
                    let added = batch.len();
                    match gallery.try_update(|g| g.append_from(generation, batch)) {
                        Some(true) => log::info!("📷 Added {} image(s)", added),
                        Some(false) => log::info!("Form was reset before images were ready"),
                        None => log::debug!("Form unmounted before images were ready"),
                    }
                }
                Err(e) => {
                    log::error!("❌ Image processing failed: {}", e);
                    AlertNotifier.notify(&Notice::EncodingFailed(e.to_string()));
                }
            }
        });
    };

    let remove = move |index: usize| {
        gallery.update(|g| {
            if let Err(e) = g.remove(index) {
                log::warn!("⚠️ {}", e);
            }
        });
    };

    let thumbnails = move || {
        gallery.with(|g| {
            g.images()
                .iter()
                .enumerate()
                .map(|(index, img)| (index, img.url().to_string()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="field">
            <label class="field-label" for="imageInput">"Images"</label>
            <input
                type="file"
                id="imageInput"
                class="field-input"
                multiple=true
                accept=ACCEPTED_IMAGE_TYPES
                on:change=on_file_change
            />
            <div class="thumbnails">
                <For
                    each=thumbnails
                    key=|entry| entry.clone()
                    children=move |(index, url)| {
                        view! {
                            <div class="thumbnail">
                                <img src=url alt=format!("Preview {}", index + 1) class="thumbnail-image"/>
                                <button
                                    type="button"
                                    class="thumbnail-remove"
                                    on:click=move |_| remove(index)
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
