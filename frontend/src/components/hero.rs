//! Hero carousel.
//!
//! Slides and navigation rules live in [`Carousel`]; this component owns
//! the interval timer and exists only while the carousel wants it.

use gloo_timers::callback::Interval;
use leptos::*;
use newmeclass::config::AUTOPLAY_INTERVAL;
use newmeclass::Carousel;

use crate::services::GlooBackend;

#[component]
pub fn HeroCarousel() -> impl IntoView {
    // `None` until the slide fetch settles, so no slide set is shown twice.
    let carousel = create_rw_signal(None::<Carousel>);
    // Tracked separately so a hover during loading carries over.
    let hovered = create_rw_signal(false);

    spawn_local(async move {
        let loaded = Carousel::load(&GlooBackend::default()).await;
        let inside = hovered.try_get_untracked().unwrap_or(false);
        carousel.try_set(Some(loaded.with_pointer_inside(inside)));
    });

    let update = move |f: fn(&mut Carousel)| {
        carousel.update(|c| {
            if let Some(c) = c.as_mut() {
                f(c);
            }
        });
    };

    let timer = store_value(None::<Interval>);

    // Create the interval when auto-play should run, drop it otherwise.
    create_effect(move |_| {
        let should_run = carousel.with(|c| c.as_ref().is_some_and(Carousel::timer_should_run));
        timer.update_value(|slot| {
            if !should_run {
                *slot = None;
            } else if slot.is_none() {
                let millis = AUTOPLAY_INTERVAL.as_millis() as u32;
                *slot = Some(Interval::new(millis, move || {
                    carousel.try_update(|c| c.as_mut().map(Carousel::tick));
                }));
            }
        });
    });

    on_cleanup(move || {
        timer.try_update_value(|slot| *slot = None);
    });

    view! {
        <section
            class="hero-carousel"
            on:mouseenter=move |_| {
                hovered.set(true);
                update(Carousel::pointer_enter);
            }
            on:mouseleave=move |_| {
                hovered.set(false);
                update(Carousel::pointer_leave);
            }
        >
            {move || match carousel.with(|c| c.as_ref().map(|c| c.current().cloned())) {
                None => Some(view! { <div class="hero-slide hero-loading">"Memuat..."</div> }.into_view()),
                Some(slide) => slide.map(|slide| view! {
                    <div
                        class="hero-slide"
                        style=format!("background-image: url('{}')", slide.image_url)
                    >
                        <div class="hero-overlay">
                            {(!slide.badge.is_empty()).then(|| view! {
                                <span class="hero-badge">{slide.badge.clone()}</span>
                            })}
                            <h1 class="hero-title">{slide.title.clone()}</h1>
                            <h2 class="hero-subtitle">{slide.subtitle.clone()}</h2>
                            <p class="hero-description">{slide.description.clone()}</p>
                            <a href=slide.cta_link.clone() class="hero-cta">{slide.cta_text.clone()}</a>
                        </div>
                    </div>
                }
                .into_view()),
            }}

            <button class="hero-nav hero-prev" on:click=move |_| update(Carousel::previous)>
                "‹"
            </button>
            <button class="hero-nav hero-next" on:click=move |_| update(Carousel::next)>
                "›"
            </button>

            <div class="hero-dots">
                {move || {
                    let (len, index) = carousel.with(|c| c.as_ref().map_or((0, 0), |c| (c.len(), c.index())));
                    (0..len)
                        .map(|i| view! {
                            <button
                                class="hero-dot"
                                class:active=move || i == index
                                on:click=move |_| {
                                    carousel.update(|c| {
                                        if let Some(c) = c.as_mut() {
                                            c.jump(i);
                                        }
                                    });
                                }
                            ></button>
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
