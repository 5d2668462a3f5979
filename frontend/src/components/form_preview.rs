//! Live preview of the listing as it is typed.

use leptos::*;

use crate::components::Carousel;
use crate::state::{Gallery, ListingForm};
use crate::types::SpaField;

#[component]
pub fn FormPreview(form: RwSignal<ListingForm>, gallery: RwSignal<Gallery>) -> impl IntoView {
    view! {
        <div class="card">
            <h2 class="card-title">"Live Preview"</h2>
            <div class="preview-fields">
                {SpaField::ALL
                    .into_iter()
                    .map(|field| {
                        view! {
                            <div class="preview-row">
                                <h3 class="preview-label">{format!("{}:", field.label())}</h3>
                                <p>{move || form.with(|f| f.listing().display(field))}</p>
                            </div>
                        }
                    })
                    .collect_view()}

                <Show
                    when=move || gallery.with(|g| !g.is_empty())
                    fallback=|| view! { }
                >
                    <Carousel gallery=gallery/>
                </Show>
            </div>
        </div>
    }
}
