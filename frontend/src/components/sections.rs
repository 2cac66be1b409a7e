//! Static landing page sections.

use leptos::*;
use leptos_router::A;

const SERVICES: &[(&str, &str, &str)] = &[
    ("🧭", "Kelas Gali Bakat", "Program menemukan minat dan bakat anak bersama fasilitator."),
    ("🧠", "NEWME Test", "Tes kepribadian untuk mengenal diri dan arah pengembangan."),
    ("🤝", "Komunitas", "Jejaring orang tua, mentor dan mitra untuk tumbuh bersama."),
];

const BENEFITS: &[&str] = &[
    "Mengenal potensi diri sejak dini",
    "Pendampingan oleh fasilitator berpengalaman",
    "Hasil tes yang mudah dipahami",
    "Akses ke komunitas dan mitra",
];

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section class="section about">
            <h2>"Tentang NEWMECLASS"</h2>
            <p>
                "Kami adalah perusahaan edukasi yang peduli minat bakat, berinovasi dengan "
                "strategi membangun jejaring komunitas."
            </p>
            <A href="/company-profile" class="button-secondary">"Selengkapnya"</A>
        </section>
    }
}

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section class="section services">
            <h2>"Layanan Kami"</h2>
            <div class="card-grid">
                {SERVICES
                    .iter()
                    .map(|(icon, title, text)| view! {
                        <div class="card">
                            <div class="card-icon">{*icon}</div>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn BenefitsSection() -> impl IntoView {
    view! {
        <section class="section benefits">
            <h2>"Manfaat"</h2>
            <ul class="benefit-list">
                {BENEFITS.iter().map(|b| view! { <li>"✓ " {*b}</li> }).collect_view()}
            </ul>
        </section>
    }
}

#[component]
pub fn VisionSection() -> impl IntoView {
    view! {
        <section class="section vision">
            <div>
                <h2>"Visi"</h2>
                <p>"Menjadi rumah tumbuh bagi setiap anak untuk menemukan versi terbaik dirinya."</p>
            </div>
            <div>
                <h2>"Misi"</h2>
                <p>"Menghadirkan program gali bakat, tes kepribadian dan komunitas yang saling menguatkan."</p>
            </div>
        </section>
    }
}
