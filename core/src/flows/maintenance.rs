//! Maintenance mode gate.

use crate::models::SiteSettings;

pub const DEFAULT_MAINTENANCE_MESSAGE: &str =
    "Kami sedang melakukan pemeliharaan sistem. Silakan kembali beberapa saat lagi.";

/// Routes that stay reachable so an admin can switch maintenance off.
pub const ADMIN_PREFIX: &str = "/admin";

/// Message to show instead of the page at `path`, or `None` when the page
/// renders normally.
pub fn maintenance_notice(settings: &SiteSettings, path: &str) -> Option<String> {
    if !settings.maintenance_mode || is_admin_path(path) {
        return None;
    }
    let message = settings
        .maintenance_message
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(DEFAULT_MAINTENANCE_MESSAGE);
    Some(message.to_string())
}

fn is_admin_path(path: &str) -> bool {
    path == ADMIN_PREFIX || path.starts_with("/admin/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(on: bool, message: Option<&str>) -> SiteSettings {
        SiteSettings {
            maintenance_mode: on,
            maintenance_message: message.map(str::to_string),
            ..SiteSettings::default()
        }
    }

    #[test]
    fn test_off_renders_pages() {
        assert_eq!(maintenance_notice(&settings(false, Some("x")), "/"), None);
    }

    #[test]
    fn test_on_blocks_public_pages() {
        let on = settings(true, Some("Kembali jam 10"));
        assert_eq!(maintenance_notice(&on, "/articles").as_deref(), Some("Kembali jam 10"));

        let blank = settings(true, Some("  "));
        assert_eq!(
            maintenance_notice(&blank, "/").as_deref(),
            Some(DEFAULT_MAINTENANCE_MESSAGE)
        );
    }

    #[test]
    fn test_admin_routes_stay_open() {
        let on = settings(true, None);
        assert_eq!(maintenance_notice(&on, "/admin/login"), None);
        assert_eq!(maintenance_notice(&on, "/admin"), None);
        assert!(maintenance_notice(&on, "/administrator").is_some());
    }
}
