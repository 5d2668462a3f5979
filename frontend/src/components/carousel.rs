//! Image carousel for the preview pane.
//!
//! Purely presentational: reads [`Gallery::view`] and forwards clicks to
//! `jump_to` / `advance`.

use leptos::*;

use crate::state::{Direction, Gallery};

#[component]
pub fn Carousel(gallery: RwSignal<Gallery>) -> impl IntoView {
    let carousel = move || gallery.with(Gallery::view);

    let go_to = move |index: usize| {
        gallery.update(|g| {
            if let Err(e) = g.jump_to(index) {
                log::warn!("⚠️ {}", e);
            }
        });
    };
    let step = move |direction: Direction| gallery.update(|g| g.advance(direction));

    view! {
        <div class="carousel">
            <h3 class="preview-label">"Images:"</h3>
            <div class="carousel-frame">
                {move || {
                    let current = carousel();
                    current.current_url.map(|url| {
                        view! {
                            <img
                                src=url
                                alt=format!("Preview {}", current.current_index + 1)
                                class="carousel-image"
                            />
                        }
                    })
                }}

                <div class="carousel-dots">
                    <For
                        each=move || {
                            let current = carousel();
                            (0..current.total)
                                .map(|index| (index, index == current.current_index))
                                .collect::<Vec<_>>()
                        }
                        key=|dot| *dot
                        children=move |(index, active)| {
                            view! {
                                <button
                                    type="button"
                                    class="carousel-dot"
                                    class:active=active
                                    on:click=move |_| go_to(index)
                                />
                            }
                        }
                    />
                </div>

                <Show
                    when=move || carousel().has_navigation()
                    fallback=|| view! { }
                >
                    <button
                        type="button"
                        class="carousel-arrow carousel-prev"
                        on:click=move |_| step(Direction::Previous)
                    >
                        "‹"
                    </button>
                    <button
                        type="button"
                        class="carousel-arrow carousel-next"
                        on:click=move |_| step(Direction::Next)
                    >
                        "›"
                    </button>
                </Show>
            </div>
        </div>
    }
}
