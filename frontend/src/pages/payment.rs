//! Payment proof upload page.

use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::{use_params_map, A};
use newmeclass::flows::payment::send_proof;
use newmeclass::models::{format_date_id, PAYMENT_METHODS};
use newmeclass::{PaymentPage, PaymentView, Toast};

use crate::components::use_toaster;
use crate::services::{BrowserFile, GlooBackend};

fn rupiah(amount: f64) -> String {
    let digits = format!("{:.0}", amount);
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    format!("Rp {}", out)
}

#[component]
pub fn PaymentRoute() -> impl IntoView {
    let params = use_params_map();
    let registration_id = params.with_untracked(|p| p.get("registrationId").cloned().unwrap_or_default());
    let toaster = use_toaster();
    let backend = store_value(GlooBackend::default());

    let page = create_rw_signal(None::<PaymentPage>);
    let file = create_rw_signal(None::<BrowserFile>);
    let (uploading, set_uploading) = create_signal(false);

    spawn_local(async move {
        let loaded = PaymentPage::load(&backend.get_value(), &registration_id).await;
        page.try_set(Some(loaded));
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if uploading.get_untracked() {
            return;
        }
        let prepared = page.with_untracked(|p| {
            p.as_ref().map(|p| p.prepare_upload(file.get_untracked()))
        });
        let upload = match prepared {
            Some(Ok(upload)) => upload,
            Some(Err(e)) => {
                toaster.push(Toast::error("Upload Gagal", e.user_message()));
                return;
            }
            None => return,
        };

        set_uploading.set(true);
        spawn_local(async move {
            match send_proof(&backend.get_value(), &upload).await {
                Ok(sent) => {
                    let message = page
                        .try_update(|p| p.as_mut().map(|p| p.apply_sent(sent)))
                        .flatten();
                    file.try_set(None);
                    if let Some(message) = message {
                        toaster.push(Toast::success("Upload Berhasil!", message));
                    }
                }
                Err(e) => toaster.push(Toast::error("Upload Gagal", e.user_message())),
            }
            set_uploading.try_set(false);
        });
    };

    let upload_form = move || {
        view! {
            <form class="form payment-form" on:submit=on_submit>
                <label>"Metode Pembayaran *"</label>
                <select
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        page.update_untracked(|p| {
                            if let Some(p) = p {
                                p.form.payment_method = value;
                            }
                        });
                    }
                >
                    <option value="">"Pilih metode"</option>
                    {PAYMENT_METHODS
                        .iter()
                        .map(|m| view! { <option value=*m>{*m}</option> })
                        .collect_view()}
                </select>
                <label>"Bukti Pembayaran * (JPG/PNG, maks 5MB)"</label>
                <input
                    type="file"
                    accept="image/jpeg,image/jpg,image/png"
                    on:change=move |ev| file.set(BrowserFile::from_input_event(&ev))
                />
                <label>"Catatan"</label>
                <textarea
                    rows="3"
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        page.update_untracked(|p| {
                            if let Some(p) = p {
                                p.form.notes = value;
                            }
                        });
                    }
                ></textarea>
                <button type="submit" class="button-primary" disabled=move || uploading.get()>
                    {move || if uploading.get() { "Mengupload..." } else { "Upload Bukti" }}
                </button>
            </form>
        }
    };

    let status_view = move |p: &PaymentPage| {
        let uploaded = p
            .payment
            .as_ref()
            .and_then(|pay| pay.uploaded_at)
            .map(format_date_id);
        let badge = p.payment.as_ref().map(|pay| {
            view! { <span class=format!("badge {}", pay.status.css_class())>{pay.status.label()}</span> }
        });

        match p.view() {
            PaymentView::Approved => view! {
                <div class="payment-status approved">
                    {badge}
                    <p>"Pembayaran Anda telah disetujui."</p>
                    <A href="/test" class="button-primary">"Lanjut ke Tes"</A>
                </div>
            }
            .into_view(),
            PaymentView::Pending { proof_url } => view! {
                <div class="payment-status pending">
                    {badge}
                    <p>"Bukti pembayaran sedang diverifikasi. Mohon tunggu."</p>
                    {uploaded.map(|d| view! { <p class="muted">"Diupload " {d}</p> })}
                    {proof_url.map(|url| view! {
                        <img class="proof-preview" src=backend.with_value(|b| b.asset_url(&url)) alt="Bukti pembayaran"/>
                    })}
                </div>
            }
            .into_view(),
            PaymentView::Rejected { reason } => view! {
                <div class="payment-status rejected">
                    {badge}
                    <p>"Pembayaran ditolak. Silakan upload ulang bukti pembayaran."</p>
                    {reason.map(|r| view! { <p class="error-message">"Alasan: " {r}</p> })}
                    {upload_form()}
                </div>
            }
            .into_view(),
            PaymentView::NotSubmitted => upload_form().into_view(),
            PaymentView::Unconfirmed => view! {
                <div class="payment-status pending">
                    <p>"Bukti pembayaran sudah diterima. Status belum dapat dimuat, silakan muat ulang halaman nanti."</p>
                </div>
            }
            .into_view(),
        }
    };

    view! {
        <div class="container page payment-page">
            <h1>"Pembayaran"</h1>
            {move || page.with(|p| match p {
                None => view! { <div class="loading">"Memuat data pembayaran..."</div> }.into_view(),
                Some(p) => {
                    let bank = p.settings.bank_name.clone().unwrap_or_default();
                    let account = p.settings.bank_account_number.clone().unwrap_or_default();
                    let holder = p.settings.bank_account_name.clone().unwrap_or_default();
                    let instructions = p.settings.payment_instructions.clone();
                    view! {
                        <div class="payment-info card">
                            <div class="payment-amount">{rupiah(p.amount())}</div>
                            <p>{bank} " " {account} " a.n. " {holder}</p>
                            {instructions.map(|i| view! { <p class="muted">{i}</p> })}
                        </div>
                        {status_view(p)}
                    }
                    .into_view()
                }
            })}
        </div>
    }
}
