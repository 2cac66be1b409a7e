//! NEWMECLASS - Frontend Rust/Leptos Application
//!
//! A WebAssembly client for the NEWMECLASS site: landing carousel,
//! registration and payment proof upload, personality tests, articles and
//! the admin team editor. Page logic lives in `newmeclass-core`; this
//! crate renders it and wires it to the browser.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! │  (Toaster + LastResult contexts)                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (navigation)                                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MaintenanceGate -> Routes                                   │
//! │  ├── Home (HeroCarousel + PopupBanner + sections)            │
//! │  ├── Registration -> Payment                                 │
//! │  ├── Tests -> Test wizard -> Result                          │
//! │  ├── Articles -> Article detail                              │
//! │  └── Admin login -> Admin team editor                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Build-time backend URL and UI constants
//! - [`components`] - Layout and landing components, toasts
//! - [`pages`] - Routed pages
//! - [`services`] - `gloo-net` backend, file handles, token storage

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod pages;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;
pub use components::*;
pub use pages::*;
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_toaster();
    provide_context(LastResult(create_rw_signal(None)));

    view! {
        <Title text=APP_NAME/>
        <Router>
            <Header/>
            <main>
                <MaintenanceGate>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/company-profile" view=CompanyProfilePage/>
                        <Route path="/kelas-gali-bakat" view=RegistrationPage/>
                        <Route path="/newme-test" view=NewmeTestPage/>
                        <Route path="/contact" view=ContactPage/>
                        <Route path="/articles" view=ArticlesPage/>
                        <Route path="/articles/:id" view=ArticleDetailPage/>
                        <Route path="/personality-tests" view=PersonalityTestsPage/>
                        <Route path="/test" view=PersonalityTestsPage/>
                        <Route path="/test/:testType" view=TestPage/>
                        <Route path="/test/result/:testType/:result" view=ResultPage/>
                        <Route path="/payment/:registrationId" view=PaymentRoute/>
                        <Route path="/privacy-policy" view=PrivacyPolicyPage/>
                        <Route path="/admin/login" view=AdminLoginPage/>
                        <Route path="/admin/team" view=AdminTeamPage/>
                        <Route path="/*any" view=NotFoundPage/>
                    </Routes>
                </MaintenanceGate>
            </main>
            <Footer/>
            <ToastViewport/>
        </Router>
    }
}
