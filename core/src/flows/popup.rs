//! Home page popup banners.
//!
//! Banners are shown one after another. Closing the popup, or stepping
//! past the last banner, dismisses it for the rest of the day; the caller
//! stores the day under [`POPUP_DISMISSED_KEY`](crate::config::POPUP_DISMISSED_KEY).

use log::{debug, warn};

use crate::api::Backend;
use crate::error::ApiResult;
use crate::models::Banner;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PopupQueue {
    banners: Vec<Banner>,
    index: usize,
    visible: bool,
}

impl PopupQueue {
    /// Queue for a fetch outcome. Nothing is queued when the fetch failed
    /// or the popup was already dismissed `today`.
    pub fn from_fetch(result: ApiResult<Vec<Banner>>, dismissed_on: Option<&str>, today: &str) -> Self {
        if dismissed_on == Some(today) {
            debug!("popup: dismissed today");
            return Self::default();
        }
        match result {
            Ok(banners) => Self {
                banners: banners.into_iter().filter(|b| b.is_active).collect(),
                index: 0,
                visible: false,
            },
            Err(e) => {
                warn!("popup: failed to load banners: {}", e);
                Self::default()
            }
        }
    }

    pub async fn load<B: Backend>(backend: &B, dismissed_on: Option<&str>, today: &str) -> Self {
        if dismissed_on == Some(today) {
            return Self::default();
        }
        Self::from_fetch(backend.popup_banners().await, dismissed_on, today)
    }

    pub fn is_empty(&self) -> bool {
        self.banners.is_empty()
    }

    pub fn len(&self) -> usize {
        self.banners.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Called once the display delay has passed.
    pub fn show(&mut self) {
        self.visible = !self.banners.is_empty();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The banner on screen, if any.
    pub fn current(&self) -> Option<&Banner> {
        self.visible.then(|| self.banners.get(self.index)).flatten()
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.banners.len()
    }

    /// Step to the next banner. Returns true when that closed the popup.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            self.close();
            true
        } else {
            self.index += 1;
            false
        }
    }

    pub fn close(&mut self) {
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{Call, MockBackend};
    use crate::error::ApiError;

    const TODAY: &str = "Mon Oct 19 2026";

    fn banner(id: &str, active: bool) -> Banner {
        Banner {
            id: id.into(),
            title: format!("Promo {}", id),
            description: None,
            image_url: String::new(),
            link: None,
            kind: "popup".into(),
            is_active: active,
            order: 0,
        }
    }

    #[test]
    fn test_hidden_until_shown() {
        let mut popup = PopupQueue::from_fetch(Ok(vec![banner("a", true)]), None, TODAY);
        assert!(popup.current().is_none());
        popup.show();
        assert_eq!(popup.current().map(|b| b.id.as_str()), Some("a"));
    }

    #[test]
    fn test_steps_through_then_closes() {
        let banners = vec![banner("a", true), banner("x", false), banner("b", true)];
        let mut popup = PopupQueue::from_fetch(Ok(banners), Some("Sun Oct 18 2026"), TODAY);
        assert_eq!(popup.len(), 2);
        popup.show();

        assert!(!popup.next());
        assert_eq!(popup.current().map(|b| b.id.as_str()), Some("b"));
        assert!(popup.is_last());
        assert!(popup.next());
        assert!(!popup.is_visible());
        assert!(popup.current().is_none());
    }

    #[test]
    fn test_nothing_on_failure_or_empty() {
        let mut popup = PopupQueue::from_fetch(Err(ApiError::Timeout(15)), None, TODAY);
        popup.show();
        assert!(!popup.is_visible());

        let mut popup = PopupQueue::from_fetch(Ok(Vec::new()), None, TODAY);
        popup.show();
        assert!(!popup.is_visible());
    }

    #[tokio::test]
    async fn test_dismissed_today_skips_request() {
        let backend = MockBackend::new();
        *backend.popups.borrow_mut() = Ok(vec![banner("a", true)]);

        let popup = PopupQueue::load(&backend, Some(TODAY), TODAY).await;
        assert!(popup.is_empty());
        assert!(backend.calls().is_empty());

        let popup = PopupQueue::load(&backend, Some("Sun Oct 18 2026"), TODAY).await;
        assert_eq!(popup.len(), 1);
        assert_eq!(backend.calls(), vec![Call::PopupBanners]);
    }
}
