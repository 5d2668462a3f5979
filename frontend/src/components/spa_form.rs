//! Listing form page: inputs on the left, live preview on the right.
//!
//! Owns the form and gallery signals for its whole lifetime; the
//! gallery is cleared on unmount so every object URL is revoked.

use leptos::ev::SubmitEvent;
use leptos::*;

use crate::components::{FormPreview, ImagePicker};
use crate::services::{deliver, AlertNotifier, HttpTransport};
use crate::state::{Gallery, ListingForm};
use crate::types::SpaField;
use crate::SUBMIT_URL;

#[component]
pub fn SpaFormPage() -> impl IntoView {
    let form = create_rw_signal(ListingForm::new());
    let gallery = create_rw_signal(Gallery::new());

    on_cleanup(move || {
        gallery.try_update(Gallery::clear);
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let request = gallery
            .with_untracked(|g| form.try_update(|f| f.begin_submit(g)))
            .flatten();
        let Some(request) = request else {
            return;
        };

        spawn_local(async move {
            let transport = HttpTransport::new(SUBMIT_URL);
            let result = deliver(&request, &transport, &AlertNotifier).await;
            form.update(|f| f.complete_submit(&result));
        });
    };

    let on_reset = move |_| {
        if form.try_update(ListingForm::reset) == Some(true) {
            log::info!("🔄 Resetting listing form");
            gallery.update(Gallery::clear);
        }
    };

    let is_submitting = move || form.with(|f| f.status().is_submitting());

    view! {
        <div class="page">
            <div class="page-columns">
                <div class="card">
                    <h2 class="card-title">"Spa Information"</h2>
                    <form class="spa-form" on:submit=on_submit>
                        {SpaField::ALL
                            .into_iter()
                            .map(|field| view! { <FieldInput field=field form=form/> })
                            .collect_view()}

                        <ImagePicker gallery=gallery/>

                        <button type="submit" class="btn btn-primary" disabled=is_submitting>
                            {move || if is_submitting() { "Submitting..." } else { "Submit" }}
                        </button>
                        <button
                            type="button"
                            class="btn btn-secondary"
                            disabled=is_submitting
                            on:click=on_reset
                        >
                            "Reset"
                        </button>
                    </form>
                </div>

                <FormPreview form=form gallery=gallery/>
            </div>
        </div>
    }
}

/// Labelled input bound to one listing field, with its inline error.
#[component]
pub fn FieldInput(field: SpaField, form: RwSignal<ListingForm>) -> impl IntoView {
    let error = move || form.with(|f| f.error(field).map(str::to_string));

    view! {
        <div class="field">
            <label class="field-label" for=field.key()>{field.label()}</label>
            <input
                id=field.key()
                name=field.key()
                type=field.input_type()
                class="field-input"
                prop:value=move || form.with(|f| f.value(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.set_field(field, value));
                }
            />
            {move || error().map(|msg| view! { <span class="field-error">{msg}</span> })}
        </div>
    }
}
