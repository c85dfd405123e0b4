/// Spacing of the ratios the intersection observer reports at.
const OBSERVER_STEP: f64 = 0.05;

/// One intersection observation of a section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sighting {
    pub intersecting: bool,
    /// Visible share of the element.
    pub ratio: f64,
    /// Share of the viewport the visible part of the element fills.
    pub coverage: f64,
}

impl Sighting {
    pub fn new(intersecting: bool, ratio: f64, visible_height: f64, viewport_height: f64) -> Self {
        let coverage = if viewport_height > 0.0 {
            (visible_height / viewport_height).min(1.0)
        } else {
            0.0
        };
        Self {
            intersecting,
            ratio,
            coverage,
        }
    }
}

/// One-shot entrance state for a section. Once revealed it stays revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    Hidden,
    Revealed,
}

impl Reveal {
    pub fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }

    /// Folds one observation into the latch. Sections taller than
    /// `1 / threshold` viewports never reach the ratio, so filling that share
    /// of the viewport counts too.
    pub fn observe(self, sighting: Sighting, threshold: f64) -> Self {
        let seen = sighting.intersecting
            && (sighting.ratio >= threshold || sighting.coverage >= threshold);
        match self {
            Self::Revealed => Self::Revealed,
            Self::Hidden if seen => Self::Revealed,
            Self::Hidden => Self::Hidden,
        }
    }

    pub fn class(self) -> Option<&'static str> {
        self.is_revealed().then_some("animate")
    }
}

/// Ratios at which the observer should call back: every step from zero up
/// to and including `threshold`.
pub fn observer_thresholds(threshold: f64) -> Vec<f64> {
    let threshold = threshold.clamp(0.0, 1.0);
    let steps = (threshold / OBSERVER_STEP).floor() as usize;
    let mut ratios: Vec<f64> = (0..=steps).map(|step| step as f64 * OBSERVER_STEP).collect();
    if ratios.last().is_some_and(|last| threshold - last > f64::EPSILON) {
        ratios.push(threshold);
    }
    ratios
}

/// Whether the hero typewriter interval should be running.
pub fn should_tick(reveal: Reveal, finished: bool) -> bool {
    reveal.is_revealed() && !finished
}

/// Character-by-character reveal of a fixed string. Starts empty and grows
/// one char per tick until the whole text shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    shown_chars: usize,
    total_chars: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let total_chars = text.chars().count();
        Self {
            text,
            shown_chars: 0,
            total_chars,
        }
    }

    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.shown_chars) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.shown_chars >= self.total_chars
    }

    pub fn tick(&mut self) {
        if !self.is_finished() {
            self.shown_chars += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 0.3;

    fn sighting(intersecting: bool, ratio: f64) -> Sighting {
        Sighting {
            intersecting,
            ratio,
            coverage: 0.0,
        }
    }

    #[test]
    fn reveal_needs_intersection_past_threshold() {
        assert_eq!(Reveal::Hidden.observe(sighting(true, 0.1), THRESHOLD), Reveal::Hidden);
        assert_eq!(Reveal::Hidden.observe(sighting(false, 0.5), THRESHOLD), Reveal::Hidden);
        assert_eq!(Reveal::Hidden.observe(sighting(true, 0.3), THRESHOLD), Reveal::Revealed);
    }

    #[test]
    fn revealed_never_goes_back() {
        let state = Reveal::Hidden.observe(sighting(true, 0.8), THRESHOLD);
        let state = state.observe(sighting(false, 0.0), THRESHOLD);
        assert!(state.is_revealed());
        assert_eq!(state.class(), Some("animate"));
    }

    #[test]
    fn section_taller_than_viewport_still_reveals() {
        let (section, viewport) = (1500.0_f64, 375.0_f64);
        let mut state = Reveal::Hidden;
        let mut offset = 0.0;
        // Scroll the section up through the viewport in 10px steps.
        while offset <= section + viewport && !state.is_revealed() {
            let top = viewport - offset;
            let visible = (viewport.min(top + section) - top.max(0.0)).max(0.0);
            let ratio = visible / section;
            assert!(ratio < THRESHOLD);
            state = state.observe(Sighting::new(visible > 0.0, ratio, visible, viewport), THRESHOLD);
            offset += 10.0;
        }
        assert!(state.is_revealed());
    }

    #[test]
    fn coverage_needs_an_intersecting_entry() {
        let stale = Sighting::new(false, 0.0, 375.0, 375.0);
        assert_eq!(Reveal::Hidden.observe(stale, THRESHOLD), Reveal::Hidden);
        assert_eq!(Sighting::new(true, 0.1, 50.0, 0.0).coverage, 0.0);
    }

    #[test]
    fn observer_reports_every_step_up_to_threshold() {
        let ratios = observer_thresholds(THRESHOLD);
        assert_eq!(ratios.len(), 7);
        assert_eq!(ratios.first().copied(), Some(0.0));
        assert!((ratios[6] - THRESHOLD).abs() < 1e-9);

        let odd = observer_thresholds(0.33);
        assert_eq!(odd.last().copied(), Some(0.33));
        assert_eq!(observer_thresholds(0.0), vec![0.0]);
    }

    #[test]
    fn typewriter_ticks_only_while_revealed_and_unfinished() {
        assert!(!should_tick(Reveal::Hidden, false));
        assert!(should_tick(Reveal::Revealed, false));
        assert!(!should_tick(Reveal::Revealed, true));

        // A finished run is never re-armed, even after another sighting.
        let again = Reveal::Revealed.observe(sighting(true, 1.0), THRESHOLD);
        assert!(!should_tick(again, true));
    }

    #[test]
    fn typewriter_walks_through_len_plus_one_states() {
        let text = "Full Stack Developer & Problem Solver";
        let mut writer = Typewriter::new(text);
        let mut states = vec![writer.visible().to_string()];
        while !writer.is_finished() {
            writer.tick();
            states.push(writer.visible().to_string());
        }

        assert_eq!(states.len(), text.len() + 1);
        assert_eq!(states.first().map(String::as_str), Some(""));
        assert_eq!(states[1], "F");
        assert_eq!(states.last().map(String::as_str), Some(text));

        writer.tick();
        assert_eq!(writer.visible(), text);
    }

    #[test]
    fn typewriter_steps_by_character_not_byte() {
        let mut writer = Typewriter::new("né✓");
        writer.tick();
        writer.tick();
        assert_eq!(writer.visible(), "né");
        writer.tick();
        assert!(writer.is_finished());
        assert_eq!(writer.visible(), "né✓");
    }
}
