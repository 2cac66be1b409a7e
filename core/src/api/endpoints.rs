//! Paths of the backend endpoints, relative to the base URL.

pub const SETTINGS: &str = "/api/settings";
pub const TEAM_PHOTO_UPLOAD: &str = "/api/settings/upload/team";
pub const HERO_SLIDES: &str = "/api/website-content/hero-slides";
pub const POPUP_BANNERS: &str = "/api/banners?type=popup&isActive=true";
pub const ARTICLES: &str = "/api/articles";
pub const CONTACT: &str = "/api/contact";
pub const REGISTRATIONS: &str = "/api/registrations";
pub const TEST_SUBMIT: &str = "/api/personality-tests/submit";
pub const TEST_ACCESS: &str = "/api/test-access/check";
pub const PAYMENT_UPLOAD: &str = "/api/payments/upload-proof";
pub const ADMIN_LOGIN: &str = "/api/admin/login";
pub const HEALTH: &str = "/api/health";

pub fn article(id: &str) -> String {
    format!("{}/{}", ARTICLES, encode_component(id))
}

pub fn questions(test_type: &str, include_premium: bool) -> String {
    format!(
        "/api/personality-tests/questions/{}?include_premium={}",
        encode_component(test_type),
        include_premium
    )
}

pub fn payment_for_registration(registration_id: &str) -> String {
    format!("/api/payments/registration/{}", encode_component(registration_id))
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
pub fn encode_component(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_questions_path() {
        assert_eq!(
            questions("introvert_extrovert", false),
            "/api/personality-tests/questions/introvert_extrovert?include_premium=false"
        );
    }

    #[test]
    fn test_ids_are_encoded() {
        assert_eq!(article("a b/c"), "/api/articles/a%20b%2Fc");
        assert_eq!(payment_for_registration("65f0"), "/api/payments/registration/65f0");
    }

    #[test]
    fn test_component_encoding_keeps_unreserved() {
        assert_eq!(encode_component("Halo NEWME, apa?"), "Halo%20NEWME%2C%20apa%3F");
        assert_eq!(encode_component("a-b_c.d~e"), "a-b_c.d~e");
        assert_eq!(encode_component("é"), "%C3%A9");
    }
}
