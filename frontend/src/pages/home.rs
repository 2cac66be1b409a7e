use leptos::*;

use crate::components::{AboutSection, BenefitsSection, HeroCarousel, PopupBanner, ServicesSection, VisionSection};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <HeroCarousel/>
        <PopupBanner/>
        <div class="container">
            <AboutSection/>
            <ServicesSection/>
            <BenefitsSection/>
            <VisionSection/>
        </div>
    }
}
