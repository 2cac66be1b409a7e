//! Popup banners on the home page.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use newmeclass::config::{POPUP_DELAY, POPUP_DISMISSED_KEY};
use newmeclass::PopupQueue;

use crate::services::{storage, GlooBackend};

/// Day string used for the once-per-day dismissal.
fn today() -> String {
    String::from(js_sys::Date::new_0().to_date_string())
}

#[component]
pub fn PopupBanner() -> impl IntoView {
    let popup = create_rw_signal(PopupQueue::default());
    let backend = store_value(GlooBackend::default());

    spawn_local(async move {
        let dismissed = storage::get(POPUP_DISMISSED_KEY);
        let loaded = PopupQueue::load(&backend.get_value(), dismissed.as_deref(), &today()).await;
        if loaded.is_empty() {
            return;
        }
        popup.try_set(loaded);
        TimeoutFuture::new(POPUP_DELAY.as_millis() as u32).await;
        popup.try_update(PopupQueue::show);
    });

    let dismiss = move || storage::set(POPUP_DISMISSED_KEY, &today());

    let on_close = move |_| {
        popup.update(PopupQueue::close);
        dismiss();
    };
    let on_next = move |_| {
        if popup.try_update(PopupQueue::next).unwrap_or(false) {
            dismiss();
        }
    };

    move || {
        popup.with(|p| {
            let banner = p.current()?.clone();
            let (len, index) = (p.len(), p.index());
            let next_label = if p.is_last() { "Tutup" } else { "Lanjut" };
            let image = backend.with_value(|b| b.asset_url(&banner.image_url));
            Some(view! {
                <div class="popup-backdrop" on:click=on_close>
                    <div class="popup-card" on:click=|ev| ev.stop_propagation()>
                        <button class="popup-close" on:click=on_close>"×"</button>
                        <img class="popup-image" src=image alt=banner.title.clone()/>
                        <div class="popup-body">
                            <h3>{banner.title.clone()}</h3>
                            {banner.description.clone().map(|d| view! { <p>{d}</p> })}
                            {banner.link.clone().map(|href| view! {
                                <a class="popup-link" href=href>"Selengkapnya"</a>
                            })}
                        </div>
                        {(len > 1).then(|| view! {
                            <div class="popup-dots">
                                {(0..len)
                                    .map(|i| view! { <span class="popup-dot" class:active=i == index></span> })
                                    .collect_view()}
                            </div>
                        })}
                        <button class="popup-next" on:click=on_next>{next_label}</button>
                    </div>
                </div>
            })
        })
    }
}
