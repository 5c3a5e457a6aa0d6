//! Per-row typewriter state machine.
//!
//! Each row independently cycles typing → holding → fading forever, with an
//! initial randomized delay so rows don't animate in lockstep.  Character
//! opacities are tracked individually: already-typed characters keep fading
//! while newer ones are still being typed, which produces the trailing
//! "fade as you type" look without any extra per-character state machine.

use super::corpus;

/// Opacity lost per frame by already-typed characters during the typing and
/// holding phases.  The fading phase uses the row's own randomized rate.
pub const TRAIL_DECAY: f32 = 0.015;

/// Columns kept clear at the left edge.
const LEFT_MARGIN: u16 = 2;

/// Rough snippet width reserved at the right edge so rows don't start so far
/// right that most of their text is clipped.
const RIGHT_RESERVE: u16 = 50;

/// Stage of the row's animation cycle.  A pending start delay is a guard on
/// top of this, not a fourth phase: a delayed row is simply invisible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Fading,
}

/// One animated line of code.
#[derive(Debug, Clone)]
pub struct Row {
    /// The snippet currently being typed on this row.
    pub text: &'static str,
    /// Character count of `text`, cached.
    pub len: usize,
    /// Left column of the text.  Re-randomized on every reset.
    pub x: u16,
    /// Fixed terminal row for this slot.
    pub y: u16,
    /// Characters revealed so far.  Non-decreasing within a typing phase.
    pub revealed: usize,
    /// Per-character opacity in [0, 1].  Always `len` entries.
    pub alpha: Vec<f32>,
    pub phase: Phase,
    /// Phase-local timer: fractional characters while typing, whole frames
    /// while holding.
    pub timer: f32,
    /// Characters revealed per frame (0.3–0.7).
    pub speed: f32,
    /// Frames to sit in the holding phase (30–80).
    pub hold: f32,
    /// Opacity lost per frame while fading (0.01–0.02).
    pub fade: f32,
    /// Frames remaining before the row starts (or restarts) typing.
    pub delay: u32,
}

impl Row {
    /// Create the row for vertical slot `index`, with freshly randomized
    /// snippet, position, timing and start delay.
    pub fn new(
        index: u16,
        row_spacing: u16,
        surface_width: u16,
        rng: &mut fastrand::Rng,
        snippets: &'static [&'static str],
    ) -> Self {
        let text = corpus::pick(rng, snippets);
        let len = text.chars().count();
        Self {
            text,
            len,
            x: random_x(surface_width, rng),
            y: index * row_spacing,
            revealed: 0,
            alpha: vec![0.0; len],
            phase: Phase::Typing,
            timer: 0.0,
            speed: 0.3 + rng.f32() * 0.4,
            hold: 30.0 + rng.f32() * 50.0,
            fade: 0.01 + rng.f32() * 0.01,
            delay: rng.u32(..200),
        }
    }

    /// True while the row is still counting down its start delay and should
    /// not be drawn at all.
    pub fn awaiting_start(&self) -> bool {
        self.delay > 0
    }

    /// Advance the row by one frame.
    pub fn step(
        &mut self,
        surface_width: u16,
        rng: &mut fastrand::Rng,
        snippets: &'static [&'static str],
    ) {
        if self.delay > 0 {
            self.delay -= 1;
            return;
        }

        match self.phase {
            Phase::Typing => {
                self.timer += self.speed;
                let revealed = (self.timer.floor() as usize).min(self.len);
                for c in self.revealed..revealed {
                    self.alpha[c] = 1.0;
                }
                self.revealed = revealed;

                // Trail: everything but the most recent character keeps
                // dimming while typing continues.
                for c in 0..self.revealed.saturating_sub(1) {
                    self.alpha[c] = (self.alpha[c] - TRAIL_DECAY).max(0.0);
                }

                if self.revealed >= self.len {
                    self.phase = Phase::Holding;
                    self.timer = 0.0;
                }
            }
            Phase::Holding => {
                for c in 0..self.revealed {
                    self.alpha[c] = (self.alpha[c] - TRAIL_DECAY).max(0.0);
                }
                self.timer += 1.0;
                if self.timer >= self.hold {
                    self.phase = Phase::Fading;
                }
            }
            Phase::Fading => {
                let mut still_visible = false;
                for c in 0..self.revealed {
                    self.alpha[c] = (self.alpha[c] - self.fade).max(0.0);
                    if self.alpha[c] > 0.0 {
                        still_visible = true;
                    }
                }
                if !still_visible {
                    self.reset(surface_width, rng, snippets);
                }
            }
        }
    }

    /// Restart this slot with a new snippet: fresh position, cleared
    /// opacities, and a short randomized delay before typing resumes.
    fn reset(
        &mut self,
        surface_width: u16,
        rng: &mut fastrand::Rng,
        snippets: &'static [&'static str],
    ) {
        self.x = random_x(surface_width, rng);
        self.text = corpus::pick(rng, snippets);
        self.len = self.text.chars().count();
        self.revealed = 0;
        self.alpha = vec![0.0; self.len];
        self.phase = Phase::Typing;
        self.timer = 0.0;
        self.delay = 10 + rng.u32(..60);
    }
}

/// Random start column, keeping a margin on both edges.  Degenerate widths
/// collapse to the left margin.
fn random_x(surface_width: u16, rng: &mut fastrand::Rng) -> u16 {
    let span = surface_width.saturating_sub(RIGHT_RESERVE);
    if span == 0 {
        return LEFT_MARGIN;
    }
    LEFT_MARGIN + rng.u16(..span)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNIPPETS: &[&str] = &["hello", "abc"];

    /// A row with deterministic timing and no start delay, over a 5-char
    /// snippet.
    fn test_row(speed: f32, hold: f32, fade: f32) -> Row {
        let mut rng = fastrand::Rng::with_seed(1);
        let mut row = Row::new(0, 3, 120, &mut rng, SNIPPETS);
        row.text = "hello";
        row.len = 5;
        row.alpha = vec![0.0; 5];
        row.speed = speed;
        row.hold = hold;
        row.fade = fade;
        row.delay = 0;
        row
    }

    #[test]
    fn delay_counts_down_before_anything_happens() {
        let mut rng = fastrand::Rng::with_seed(2);
        let mut row = test_row(1.0, 5.0, 0.5);
        row.delay = 3;
        for remaining in (0..3).rev() {
            row.step(120, &mut rng, SNIPPETS);
            assert_eq!(row.delay, remaining);
            assert_eq!(row.revealed, 0);
            assert_eq!(row.timer, 0.0);
        }
        assert!(!row.awaiting_start());
        row.step(120, &mut rng, SNIPPETS);
        assert_eq!(row.revealed, 1);
    }

    #[test]
    fn one_char_per_frame_reveals_fully_in_len_steps() {
        let mut rng = fastrand::Rng::with_seed(3);
        let mut row = test_row(1.0, 10.0, 0.02);
        for step in 1..=5 {
            assert_eq!(row.phase, Phase::Typing);
            row.step(120, &mut rng, SNIPPETS);
            assert_eq!(row.revealed, step);
        }
        // Exactly five steps to full reveal, then holding begins.
        assert_eq!(row.revealed, row.len);
        assert_eq!(row.phase, Phase::Holding);
        assert_eq!(row.timer, 0.0);
    }

    #[test]
    fn revealed_is_monotonic_while_typing() {
        let mut rng = fastrand::Rng::with_seed(4);
        let mut row = test_row(0.37, 40.0, 0.015);
        let mut prev = 0;
        while row.phase == Phase::Typing {
            row.step(120, &mut rng, SNIPPETS);
            assert!(row.revealed >= prev);
            prev = row.revealed;
        }
        assert_eq!(prev, row.len);
    }

    #[test]
    fn opacities_stay_in_unit_range() {
        let mut rng = fastrand::Rng::with_seed(5);
        let mut row = test_row(0.45, 12.0, 0.013);
        for _ in 0..5_000 {
            row.step(120, &mut rng, SNIPPETS);
            assert_eq!(row.alpha.len(), row.len);
            for &a in &row.alpha {
                assert!((0.0..=1.0).contains(&a), "alpha out of range: {a}");
            }
        }
    }

    #[test]
    fn holding_transitions_exactly_at_the_threshold() {
        let mut rng = fastrand::Rng::with_seed(6);
        let mut row = test_row(5.0, 4.0, 0.02);
        row.step(120, &mut rng, SNIPPETS); // full reveal in one frame
        assert_eq!(row.phase, Phase::Holding);

        // Three holding steps stay put, the fourth crosses hold = 4.0.
        for _ in 0..3 {
            row.step(120, &mut rng, SNIPPETS);
            assert_eq!(row.phase, Phase::Holding);
        }
        row.step(120, &mut rng, SNIPPETS);
        assert_eq!(row.phase, Phase::Fading);
    }

    #[test]
    fn fully_faded_row_resets_in_place() {
        let mut rng = fastrand::Rng::with_seed(7);
        let mut row = test_row(5.0, 1.0, 1.0);
        row.step(120, &mut rng, SNIPPETS); // typing → holding
        row.step(120, &mut rng, SNIPPETS); // holding → fading
        assert_eq!(row.phase, Phase::Fading);
        // fade = 1.0 wipes every character in one step, triggering the reset.
        row.step(120, &mut rng, SNIPPETS);

        assert_eq!(row.phase, Phase::Typing);
        assert_eq!(row.revealed, 0);
        assert_eq!(row.timer, 0.0);
        assert_eq!(row.alpha.len(), row.len);
        assert!(row.alpha.iter().all(|&a| a == 0.0));
        assert!(row.delay >= 10, "reset must apply a fresh start delay");
        assert!(SNIPPETS.contains(&row.text));
    }

    #[test]
    fn trail_dims_older_characters_but_not_the_newest() {
        let mut rng = fastrand::Rng::with_seed(8);
        let mut row = test_row(1.0, 50.0, 0.015);
        row.step(120, &mut rng, SNIPPETS);
        row.step(120, &mut rng, SNIPPETS);
        // Two revealed: the first has decayed once, the latest is untouched.
        assert!(row.alpha[0] < 1.0);
        assert_eq!(row.alpha[1], 1.0);
    }
}
