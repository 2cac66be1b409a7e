//! Maintenance mode gate around the routed pages.

use leptos::*;
use leptos_router::use_location;
use newmeclass::flows::maintenance_notice;
use newmeclass::models::SiteSettings;
use newmeclass::Backend;

use crate::services::GlooBackend;

/// Renders `children` unless maintenance mode is on for the current path.
/// Pages render normally until settings arrive, and when they fail to load.
#[component]
pub fn MaintenanceGate(children: ChildrenFn) -> impl IntoView {
    let settings = create_rw_signal(None::<SiteSettings>);
    let location = use_location();

    spawn_local(async move {
        match GlooBackend::default().settings().await {
            Ok(loaded) => {
                settings.try_set(Some(loaded));
            }
            Err(e) => log::warn!("maintenance: settings unavailable: {}", e),
        }
    });

    let notice = create_memo(move |_| {
        let path = location.pathname.get();
        settings.with(|s| s.as_ref().and_then(|s| maintenance_notice(s, &path)))
    });

    view! {
        <Show
            when=move || notice.with(Option::is_none)
            fallback=move || view! {
                <section class="maintenance-page">
                    <div class="maintenance-icon">"🛠️"</div>
                    <h1>"Sedang Dalam Pemeliharaan"</h1>
                    <p>{move || notice.get().unwrap_or_default()}</p>
                </section>
            }
        >
            {children()}
        </Show>
    }
}
