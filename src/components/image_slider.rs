//! Auto-advancing image slider.

use leptos::prelude::*;

use crate::state::slider::SliderState;

/// One slide: image source and alt text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
    pub src: &'static str,
    pub alt: &'static str,
}

/// Cycles through `slides`, pausing while hovered. Clicking a slide shows it.
#[component]
pub fn ImageSlider(slides: Vec<Slide>) -> impl IntoView {
    let slider = RwSignal::new(SliderState::new(slides.len()));

    #[cfg(feature = "hydrate")]
    {
        use crate::config::SLIDE_INTERVAL_MS;
        use gloo_timers::callback::Interval;

        let tick = Interval::new(SLIDE_INTERVAL_MS, move || {
            let _ = slider.try_update(SliderState::tick);
        });
        let tick = StoredValue::new_local(Some(tick));
        on_cleanup(move || {
            let _ = tick.try_update_value(Option::take);
        });
    }

    view! {
        <div
            class="image-slider"
            on:mouseenter=move |_| slider.update(SliderState::pause)
            on:mouseleave=move |_| slider.update(SliderState::resume)
        >
            {slides
                .into_iter()
                .enumerate()
                .map(|(index, slide)| {
                    view! {
                        <img
                            class="slide"
                            class:active=move || slider.with(|s| s.is_active(index))
                            src=slide.src
                            alt=slide.alt
                            on:click=move |_| slider.update(|s| s.show(index))
                        />
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
