//! Screen reader announcements through a polite live region.

/// Text of the live region.
///
/// Each announcement is cleared after a short delay; the generation counter
/// keeps an older clear timer from wiping a newer announcement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Announcer {
    text: String,
    generation: u64,
}

impl Announcer {
    /// Replace the live region text. Returns the generation to clear later.
    pub fn announce(&mut self, message: impl Into<String>) -> u64 {
        self.generation += 1;
        self.text = message.into();
        tracing::debug!(generation = self.generation, "Screen reader announcement");
        self.generation
    }

    /// Clear the text if no newer announcement was made.
    pub fn clear(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.text.clear();
        true
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
