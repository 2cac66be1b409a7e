//! Contact page.

use leptos::ev::SubmitEvent;
use leptos::*;
use newmeclass::models::SiteSettings;
use newmeclass::{Backend, ContactForm};

use crate::components::use_toaster;
use crate::services::GlooBackend;

#[component]
pub fn ContactPage() -> impl IntoView {
    let toaster = use_toaster();
    let form = create_rw_signal(ContactForm::default());
    let (sending, set_sending) = create_signal(false);
    let settings = create_rw_signal(SiteSettings::default());

    spawn_local(async move {
        if let Ok(loaded) = GlooBackend::default().settings().await {
            settings.try_set(loaded);
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let mut current = form.get_untracked();
        set_sending.set(true);

        spawn_local(async move {
            let outcome = current.submit(&GlooBackend::default()).await;
            form.try_set(current);
            match outcome {
                Ok(submitted) => toaster.push(submitted.toast),
                Err(toast) => toaster.push(toast),
            }
            set_sending.try_set(false);
        });
    };

    view! {
        <div class="container page contact-page">
            <h1>"Hubungi Kami"</h1>
            <div class="contact-grid">
                <div class="contact-info">
                    <p>"📧 " {move || settings.with(|s| s.email.clone())}</p>
                    <p>"📞 " {move || settings.with(|s| s.phone.clone())}</p>
                    <p>"📍 " {move || settings.with(|s| s.address.clone())}</p>
                    <a
                        class="button-secondary"
                        target="_blank"
                        href=move || settings.with(SiteSettings::whatsapp_link)
                    >
                        "Chat WhatsApp"
                    </a>
                </div>

                <form class="form" on:submit=on_submit>
                    <label>"Nama *"</label>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        prop:disabled=move || sending.get()
                    />
                    <label>"Email *"</label>
                    <input
                        type="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        prop:disabled=move || sending.get()
                    />
                    <label>"Telepon"</label>
                    <input
                        type="tel"
                        prop:value=move || form.with(|f| f.phone.clone())
                        on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                        prop:disabled=move || sending.get()
                    />
                    <label>"Subjek"</label>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.subject.clone())
                        on:input=move |ev| form.update(|f| f.subject = event_target_value(&ev))
                        prop:disabled=move || sending.get()
                    />
                    <label>"Pesan *"</label>
                    <textarea
                        rows="5"
                        prop:value=move || form.with(|f| f.message.clone())
                        on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                        prop:disabled=move || sending.get()
                    ></textarea>
                    <button type="submit" class="button-primary" disabled=move || sending.get()>
                        {move || if sending.get() { "Mengirim..." } else { "Kirim Pesan" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
