//! Static and mostly static pages.

use leptos::*;
use leptos_router::A;
use newmeclass::models::{SiteSettings, TeamList};
use newmeclass::Backend;

use crate::components::{AboutSection, VisionSection};
use crate::services::GlooBackend;

#[component]
pub fn CompanyProfilePage() -> impl IntoView {
    let backend = GlooBackend::default();
    let assets = backend.clone();
    let settings = create_rw_signal(None::<SiteSettings>);

    spawn_local(async move {
        match backend.settings().await {
            Ok(loaded) => {
                settings.try_set(Some(loaded));
            }
            Err(e) => {
                log::warn!("Company profile settings unavailable: {}", e);
                settings.try_set(Some(SiteSettings::default()));
            }
        }
    });

    let listings = move || {
        settings.with(|s| {
            let s = s.as_ref()?;
            if TeamList::ALL.iter().all(|&list| s.team_list(list).is_empty()) {
                return Some(view! {
                    <section class="section">
                        <h2>"B.O.D & TEAM SUPPORT"</h2>
                        <p class="muted">"Informasi tim akan segera hadir."</p>
                    </section>
                }
                .into_view());
            }
            Some(
                TeamList::ALL
                    .into_iter()
                    .filter(|&list| !s.team_list(list).is_empty())
                    .map(|list| view! {
                        <section class="section">
                            <h2>{list.label().to_uppercase()}</h2>
                            <div class="card-grid">
                                {s.team_list(list)
                                    .iter()
                                    .map(|member| view! {
                                        <div class="card team-card">
                                            {(!member.photo.is_empty()).then(|| view! {
                                                <img class="team-photo" src=assets.asset_url(&member.photo) alt=""/>
                                            })}
                                            <h3>{member.name.clone()}</h3>
                                            <span class="muted">{member.position.clone()}</span>
                                            <p>{member.description.clone()}</p>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        </section>
                    })
                    .collect_view(),
            )
        })
    };

    view! {
        <div class="container page company-profile">
            <h1>"Company Profile"</h1>
            <AboutSection/>
            <VisionSection/>
            {listings}
        </div>
    }
}

#[component]
pub fn NewmeTestPage() -> impl IntoView {
    view! {
        <div class="container page newme-test">
            <h1>"NEWME TEST"</h1>
            <p class="subtitle">"Kenali potensi dan kepribadianmu."</p>
            <div class="card-grid">
                <div class="card">
                    <h3>"Kelas Gali Bakat"</h3>
                    <p>"Tes minat bakat lengkap dengan pendampingan."</p>
                    <A href="/kelas-gali-bakat" class="button-primary">"Daftar"</A>
                </div>
                <div class="card">
                    <h3>"Tes Kepribadian"</h3>
                    <p>"Tes singkat introvert/ekstrovert dan elemen kepribadian."</p>
                    <A href="/personality-tests" class="button-primary">"Mulai"</A>
                </div>
            </div>
        </div>
    }
}

const PRIVACY_SECTIONS: &[(&str, &str)] = &[
    ("1. Pendahuluan", "NEWMECLASS menghormati privasi Anda. Kebijakan ini menjelaskan bagaimana kami mengumpulkan dan menggunakan data Anda."),
    ("2. Informasi yang Kami Kumpulkan", "Nama, email, nomor telepon, jawaban tes, dan bukti pembayaran yang Anda kirimkan."),
    ("3. Bagaimana Kami Menggunakan Informasi Anda", "Untuk memproses pendaftaran, menyusun hasil tes, dan menghubungi Anda terkait layanan kami."),
    ("4. Berbagi Informasi", "Kami tidak menjual data Anda. Data hanya dibagikan bila diwajibkan hukum."),
    ("5. Keamanan Data", "Data disimpan di server yang dilindungi dan hanya dapat diakses oleh admin."),
    ("6. Hak Anda", "Anda dapat meminta akses, koreksi, atau penghapusan data Anda kapan saja."),
    ("7. Cookies", "Kami menyimpan token login di penyimpanan lokal browser Anda."),
    ("8. Penyimpanan Data", "Data disimpan selama diperlukan untuk layanan atau sesuai ketentuan hukum."),
    ("9. Privasi Anak-anak", "Pendaftaran peserta di bawah umur dilakukan dengan persetujuan orang tua atau wali."),
    ("10. Perubahan Kebijakan", "Perubahan kebijakan akan diumumkan di halaman ini."),
    ("11. Kontak Kami", "Hubungi kami melalui halaman kontak untuk pertanyaan terkait privasi."),
];

#[component]
pub fn PrivacyPolicyPage() -> impl IntoView {
    view! {
        <div class="container page privacy-policy">
            <h1>"Kebijakan Privasi"</h1>
            {PRIVACY_SECTIONS
                .iter()
                .map(|(title, body)| view! {
                    <section class="section">
                        <h2>{*title}</h2>
                        <p>{*body}</p>
                    </section>
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="container page not-found">
            <h1>"404"</h1>
            <p>"Halaman tidak ditemukan."</p>
            <A href="/" class="button-primary">"Kembali ke Beranda"</A>
        </div>
    }
}
