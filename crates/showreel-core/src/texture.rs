//! Playback status of each item's live texture.
//!
//! Decoding happens elsewhere; the scene only needs to know whether a frame
//! is available and when to ask the decoder to try again.

use crate::constants::TEXTURE_RETRY_SECS;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TextureState {
    #[default]
    Pending,
    Playing,
    /// Start was refused (e.g. autoplay policy); retry no earlier than `retry_at`.
    Blocked { retry_at: f32 },
    /// No source configured for this item.
    Absent,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextureSlot {
    pub source: Option<String>,
    pub state: TextureState,
}

impl TextureSlot {
    pub fn new(source: Option<String>) -> Self {
        let state = if source.is_some() {
            TextureState::Pending
        } else {
            TextureState::Absent
        };
        Self { source, state }
    }

    pub fn is_live(&self) -> bool {
        self.state == TextureState::Playing
    }

    pub fn mark_playing(&mut self) {
        self.state = TextureState::Playing;
    }

    pub fn mark_blocked(&mut self, now: f32) {
        self.state = TextureState::Blocked {
            retry_at: now + TEXTURE_RETRY_SECS,
        };
    }

    /// True when the decoder should be asked to start again.
    pub fn wants_retry(&self, now: f32) -> bool {
        match self.state {
            TextureState::Pending => true,
            TextureState::Blocked { retry_at } => now >= retry_at,
            TextureState::Playing | TextureState::Absent => false,
        }
    }

    /// A user gesture lifts autoplay restrictions, so retry right away.
    pub fn retry_now(&mut self) {
        if let TextureState::Blocked { .. } = self.state {
            self.state = TextureState::Pending;
        }
    }
}

/// The decoder side of a live texture.
pub trait TextureProvider {
    /// Ask playback of `source` to start for item `item`. Returns false when
    /// the start was refused; the slot is retried later.
    fn try_start(&mut self, item: usize, source: &str) -> bool;
}
