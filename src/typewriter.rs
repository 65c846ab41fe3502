/// Typing animation for the hero banner. Each `tick` types or deletes one
/// character, and a finished phrase is held for `hold_ticks` ticks.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    hold_ticks: u32,
    index: usize,
    // chars of the current phrase that are shown
    shown: usize,
    phase: Phase,
    text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding(u32),
    Deleting,
}

impl Typewriter {
    pub fn new<S: Into<String>>(phrases: impl IntoIterator<Item = S>, hold_ticks: u32) -> Self {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            hold_ticks,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
            text: String::new(),
        }
    }

    /// What to render before any ticks run, e.g. during server rendering.
    pub fn initial_text(&self) -> &str {
        self.phrases.first().map(String::as_str).unwrap_or_default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tick(&mut self) -> &str {
        let Some(phrase) = self.phrases.get(self.index) else {
            return &self.text;
        };
        let len = phrase.chars().count();
        match self.phase {
            Phase::Typing => {
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown >= len {
                    self.phase = Phase::Holding(self.hold_ticks);
                }
            }
            Phase::Holding(0) => self.phase = Phase::Deleting,
            Phase::Holding(n) => self.phase = Phase::Holding(n - 1),
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                }
            }
        }
        let phrase = &self.phrases[self.index];
        self.text = phrase.chars().take(self.shown).collect();
        &self.text
    }
}
