use leptos::*;
use leptos_router::A;

use crate::config::APP_NAME;

const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Beranda"),
    ("/company-profile", "Profil"),
    ("/kelas-gali-bakat", "Kelas Gali Bakat"),
    ("/newme-test", "NEWME Test"),
    ("/articles", "Artikel"),
    ("/contact", "Kontak"),
];

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);

    view! {
        <header>
            <div class="header-left">
                <A href="/" class="logo">{APP_NAME}</A>
            </div>
            <button
                class="menu-toggle"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>
            <nav
                class="header-right"
                class:open=move || menu_open.get()
                on:click=move |_| set_menu_open.set(false)
            >
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| view! {
                        <A
                            href=*href
                            class="nav-link"
                            active_class="active"
                            exact=true
                        >
                            {*label}
                        </A>
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
