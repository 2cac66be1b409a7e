use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::deserialize_id;

/// One hero carousel slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    #[serde(alias = "_id", deserialize_with = "deserialize_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub badge: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub cta_text: String,
    #[serde(default)]
    pub cta_link: String,
}

impl Slide {
    #[allow(clippy::too_many_arguments)]
    fn fallback(
        id: &str,
        title: &str,
        subtitle: &str,
        description: &str,
        badge: &str,
        image_url: &str,
        cta_text: &str,
        cta_link: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            description: description.to_string(),
            badge: badge.to_string(),
            image_url: image_url.to_string(),
            cta_text: cta_text.to_string(),
            cta_link: cta_link.to_string(),
        }
    }
}

/// Slides shown when the backend has none or cannot be reached.
pub static FALLBACK_SLIDES: Lazy<Vec<Slide>> = Lazy::new(|| {
    vec![
        Slide::fallback(
            "1",
            "COMPANY PROFILE",
            "NEWMECLASS",
            "Kami, perusahaan edukasi peduli minat bakat, yang berinovasi dengan tambahan strategi membangun jejaring komunitas.",
            "Kelas Peduli Talenta",
            "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?w=800&q=80",
            "www.newmeclass.com",
            "/",
        ),
        Slide::fallback(
            "2",
            "SIAPA KAMI?",
            "PT. MITRA SEMESTA EDUCLASS",
            "NEWMECLASS adalah sebuah brand dan produk dari PT. MITRA SEMESTA EDUCLASS, yang bergerak dengan produk Edukasi dan Komunitas.",
            "B to B & B to C",
            "https://images.unsplash.com/photo-1551434678-e076c223a692?w=800&q=80",
            "Pelajari Lebih Lanjut",
            "/company-profile",
        ),
        Slide::fallback(
            "3",
            "PRODUK USAHA",
            "NIB: 2805240064989",
            "Berbagai produk dan layanan edukasi untuk pengembangan potensi diri dan bakat alami Anda.",
            "Terdaftar Resmi",
            "https://images.unsplash.com/photo-1552664730-d307ca884978?w=800&q=80",
            "Lihat Produk",
            "/shop",
        ),
        Slide::fallback(
            "4",
            "VISI & MISI",
            "NEWME CLASS",
            "Menjadi bagian dari kemajuan bangsa lewat peran EDUKASI JATIDIRI di berbagai lembaga dan organisasi.",
            "PT. MITRA SEMESTA EDUCLASS",
            "https://images.unsplash.com/photo-1523240795612-9a054b0db644?w=800&q=80",
            "Lihat Visi Misi",
            "/company-profile",
        ),
    ]
});
