//! Hero carousel state machine.
//!
//! The controller owns the slide set and the auto-play flag; the page owns
//! the interval timer and asks [`Carousel::timer_should_run`] whether it
//! should exist at all.

use log::{debug, warn};

use crate::api::Backend;
use crate::error::ApiResult;
use crate::models::{Slide, FALLBACK_SLIDES};

/// Where the current slide set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideSource {
    Remote,
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    slides: Vec<Slide>,
    source: SlideSource,
    index: usize,
    auto_playing: bool,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::fallback()
    }
}

impl Carousel {
    /// Carousel over the built-in slides.
    pub fn fallback() -> Self {
        Self {
            slides: FALLBACK_SLIDES.clone(),
            source: SlideSource::Fallback,
            index: 0,
            auto_playing: true,
        }
    }

    /// Build from a fetch outcome. Errors and empty lists both yield the
    /// fallback set.
    pub fn from_fetch(result: ApiResult<Vec<Slide>>) -> Self {
        match result {
            Ok(slides) if !slides.is_empty() => {
                debug!("carousel: {} remote slides", slides.len());
                Self {
                    slides,
                    source: SlideSource::Remote,
                    index: 0,
                    auto_playing: true,
                }
            }
            Ok(_) => {
                debug!("carousel: backend returned no slides, using fallback");
                Self::fallback()
            }
            Err(e) => {
                warn!("carousel: failed to load slides: {}", e);
                Self::fallback()
            }
        }
    }

    pub async fn load<B: Backend>(backend: &B) -> Self {
        Self::from_fetch(backend.hero_slides().await)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn source(&self) -> SlideSource {
        self.source
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current(&self) -> Option<&Slide> {
        self.slides.get(self.index)
    }

    pub fn is_auto_playing(&self) -> bool {
        self.auto_playing
    }

    pub fn next(&mut self) {
        if !self.slides.is_empty() {
            self.index = (self.index + 1) % self.slides.len();
        }
    }

    pub fn previous(&mut self) {
        let n = self.slides.len();
        if n > 0 {
            self.index = (self.index + n - 1) % n;
        }
    }

    /// Go to slide `i`. Returns false (and does nothing) when out of range.
    pub fn jump(&mut self, i: usize) -> bool {
        if i < self.slides.len() {
            self.index = i;
            true
        } else {
            false
        }
    }

    /// Timer callback. Ignored while paused.
    pub fn tick(&mut self) {
        if self.auto_playing {
            self.next();
        }
    }

    pub fn pointer_enter(&mut self) {
        self.auto_playing = false;
    }

    pub fn pointer_leave(&mut self) {
        self.auto_playing = true;
    }

    /// Start paused when the pointer is already over the carousel.
    pub fn with_pointer_inside(mut self, inside: bool) -> Self {
        self.auto_playing = !inside;
        self
    }

    /// Whether an interval timer should currently exist.
    pub fn timer_should_run(&self) -> bool {
        self.auto_playing && !self.slides.is_empty()
    }
}
