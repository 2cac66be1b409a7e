//! Footer with contact details from the settings document.

use leptos::*;
use newmeclass::models::SiteSettings;
use newmeclass::Backend;

use crate::services::GlooBackend;

#[component]
pub fn Footer() -> impl IntoView {
    let settings = create_rw_signal(SiteSettings::default());

    spawn_local(async move {
        match GlooBackend::default().settings().await {
            Ok(loaded) => {
                settings.try_set(loaded);
            }
            Err(e) => log::warn!("Footer settings unavailable: {}", e),
        }
    });

    view! {
        <footer>
            <div class="footer-contact">
                <div class="footer-brand">{move || settings.with(|s| s.site_name.clone())}</div>
                <div>"📧 " {move || settings.with(|s| s.email.clone())}</div>
                <div>"📞 " {move || settings.with(|s| s.phone.clone())}</div>
                <div>"📷 " {move || settings.with(|s| s.instagram.clone())}</div>
            </div>
            <div class="footer-links">
                <a href="/privacy-policy" class="footer-link">"Kebijakan Privasi"</a>
                <a
                    href=move || settings.with(SiteSettings::whatsapp_link)
                    class="footer-link"
                    target="_blank"
                >
                    "WhatsApp"
                </a>
            </div>
            <div>"Copyright © 2025 NEWMECLASS • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
        </footer>
    }
}
