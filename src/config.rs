use log::LevelFilter;

pub const THEME_KEY: &str = "theme";
pub const REVEAL_THRESHOLD: f64 = 0.3;
pub const TYPEWRITER_TICK_MS: u32 = 100;
pub const SUCCESS_BANNER_MS: u32 = 3_000;
pub const COPY_FEEDBACK_MS: u32 = 2_000;
pub const BACK_TO_TOP_OFFSET: f64 = 500.0;
pub const NAV_REFERENCE_LINE: f64 = 100.0;
pub const HEADER_SCROLLED_OFFSET: f64 = 50.0;
pub const ANIMATION_STAGGER_SECONDS: f64 = 0.1;

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Values baked in at build time by `trunk build` (or any cargo invocation).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub public_url: String,
    pub log_level: LevelFilter,
}

impl SiteConfig {
    pub fn from_build_env() -> Self {
        Self {
            public_url: normalize_public_url(option_env!("PUBLIC_URL")),
            log_level: parse_log_level(option_env!("PORTFOLIO_LOG"), DEFAULT_LOG_LEVEL),
        }
    }

    pub fn skill_icon_src(&self, icon: &str) -> String {
        format!("{}/assets/skills/{icon}", self.public_url)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            public_url: String::new(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

fn normalize_public_url(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .unwrap_or_default()
        .trim_end_matches('/')
        .to_string()
}

fn parse_log_level(raw: Option<&str>, default: LevelFilter) -> LevelFilter {
    match raw.map(|value| value.trim().to_ascii_lowercase()).as_deref() {
        Some("off") => LevelFilter::Off,
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => default,
    }
}

pub fn stagger_delay(index: usize) -> String {
    format!("animation-delay: {:.1}s;", index as f64 * ANIMATION_STAGGER_SECONDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_timings_and_offsets_are_fixed() {
        assert_eq!(THEME_KEY, "theme");
        assert_eq!(REVEAL_THRESHOLD, 0.3);
        assert_eq!(TYPEWRITER_TICK_MS, 100);
        assert_eq!(SUCCESS_BANNER_MS, 3_000);
        assert_eq!(COPY_FEEDBACK_MS, 2_000);
        assert_eq!(BACK_TO_TOP_OFFSET, 500.0);
        assert_eq!(NAV_REFERENCE_LINE, 100.0);
        assert_eq!(HEADER_SCROLLED_OFFSET, 50.0);
    }

    #[test]
    fn log_level_parses_known_names_case_insensitively() {
        assert_eq!(parse_log_level(Some("DEBUG"), LevelFilter::Info), LevelFilter::Debug);
        assert_eq!(parse_log_level(Some(" warn "), LevelFilter::Info), LevelFilter::Warn);
    }

    #[test]
    fn unknown_or_missing_log_level_falls_back() {
        assert_eq!(parse_log_level(Some("loud"), LevelFilter::Info), LevelFilter::Info);
        assert_eq!(parse_log_level(None, LevelFilter::Error), LevelFilter::Error);
    }

    #[test]
    fn skill_icon_path_joins_public_url() {
        let config = SiteConfig {
            public_url: normalize_public_url(Some("/portfolio/")),
            ..SiteConfig::default()
        };
        assert_eq!(
            config.skill_icon_src("java-logo.png"),
            "/portfolio/assets/skills/java-logo.png"
        );
        assert_eq!(
            SiteConfig::default().skill_icon_src("js-logo.png"),
            "/assets/skills/js-logo.png"
        );
    }

    #[test]
    fn stagger_delay_steps_by_a_tenth_of_a_second() {
        assert_eq!(stagger_delay(0), "animation-delay: 0.0s;");
        assert_eq!(stagger_delay(3), "animation-delay: 0.3s;");
    }
}
