//! Named modal surfaces and the page scroll lock.
//!
//! `Registration` and `Success` are primary modals and never stack. `Video`
//! is independent and may sit on top of either.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalName {
    Registration,
    Success,
    Video,
}

impl ModalName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModalName::Registration => "registration",
            ModalName::Success => "success",
            ModalName::Video => "video",
        }
    }

    /// DOM id of the modal's backdrop element
    pub fn element_id(&self) -> &'static str {
        match self {
            ModalName::Registration => "registration-modal",
            ModalName::Success => "success-modal",
            ModalName::Video => "video-modal",
        }
    }

    fn is_primary(&self) -> bool {
        !matches!(self, ModalName::Video)
    }
}

impl fmt::Display for ModalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModalError {
    #[error("cannot open {requested} while {open} is open")]
    Blocked { requested: ModalName, open: ModalName },
}

pub fn video_embed_url(video_id: &str) -> String {
    format!(
        "https://www.youtube.com/embed/{}?autoplay=1&rel=0&modestbranding=1",
        video_id
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModalController {
    registration: bool,
    success: bool,
    video: bool,
    video_id: String,
    video_src: Option<String>,
    scroll_locked: bool,
}

impl ModalController {
    pub fn new(video_id: &str) -> Self {
        Self {
            registration: false,
            success: false,
            video: false,
            video_id: video_id.to_string(),
            video_src: None,
            scroll_locked: false,
        }
    }

    pub fn open(&mut self, name: ModalName) -> Result<(), ModalError> {
        if name.is_primary() {
            let other = match name {
                ModalName::Registration => ModalName::Success,
                _ => ModalName::Registration,
            };
            if self.is_open(other) {
                return Err(ModalError::Blocked {
                    requested: name,
                    open: other,
                });
            }
        }

        if name == ModalName::Video && !self.video {
            self.video_src = Some(video_embed_url(&self.video_id));
        }
        *self.flag_mut(name) = true;
        self.scroll_locked = true;
        Ok(())
    }

    /// Returns whether anything changed.
    pub fn close(&mut self, name: ModalName) -> bool {
        if !self.is_open(name) {
            return false;
        }

        *self.flag_mut(name) = false;
        if name == ModalName::Video {
            self.video_src = None;
        }
        self.scroll_locked = self.registration || self.success || self.video;
        true
    }

    /// A click on the modal's own backdrop dismisses it.
    pub fn backdrop_clicked(&mut self, name: ModalName) -> bool {
        self.close(name)
    }

    pub fn is_open(&self, name: ModalName) -> bool {
        match name {
            ModalName::Registration => self.registration,
            ModalName::Success => self.success,
            ModalName::Video => self.video,
        }
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Iframe source for the video modal; `None` while closed
    pub fn video_src(&self) -> Option<&str> {
        self.video_src.as_deref()
    }

    fn flag_mut(&mut self, name: ModalName) -> &mut bool {
        match name {
            ModalName::Registration => &mut self.registration,
            ModalName::Success => &mut self.success,
            ModalName::Video => &mut self.video,
        }
    }
}
