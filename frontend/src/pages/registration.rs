//! Kelas Gali Bakat registration.

use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::{use_navigate, use_query_map, NavigateOptions};
use newmeclass::flows::forms::payment_route;
use newmeclass::RegistrationForm;

use crate::components::use_toaster;
use crate::services::GlooBackend;

#[component]
pub fn RegistrationPage() -> impl IntoView {
    let toaster = use_toaster();
    let navigate = use_navigate();
    let query = use_query_map();
    let referral = query.with_untracked(|q| q.get("ref").cloned());

    let form = create_rw_signal(RegistrationForm::with_referral(referral.as_deref()));
    let (sending, set_sending) = create_signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let mut current = form.get_untracked();
        let navigate = navigate.clone();
        set_sending.set(true);

        spawn_local(async move {
            let outcome = current.submit(&GlooBackend::default()).await;
            form.try_set(current);
            set_sending.try_set(false);
            match outcome {
                Ok(submitted) => {
                    toaster.push(submitted.toast);
                    navigate(&payment_route(&submitted.response.id), NavigateOptions::default());
                }
                Err(toast) => toaster.push(toast),
            }
        });
    };

    view! {
        <div class="container page registration-page">
            <h1>"Kelas Gali Bakat"</h1>
            <p class="subtitle">
                "Daftarkan diri untuk mengikuti tes minat bakat dan sesi pendampingan."
            </p>
            <form class="form" on:submit=on_submit>
                <label>"Nama Lengkap *"</label>
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
                <label>"Kode Rekomendasi"</label>
                <input
                    type="text"
                    prop:value=move || form.with(|f| f.recommender_id.clone())
                    on:input=move |ev| form.update(|f| f.recommender_id = event_target_value(&ev))
                    prop:disabled=move || sending.get()
                />
                <button type="submit" class="button-primary" disabled=move || sending.get()>
                    {move || if sending.get() { "Mendaftar..." } else { "Daftar Sekarang" }}
                </button>
            </form>
        </div>
    }
}
