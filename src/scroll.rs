use crate::config::{BACK_TO_TOP_OFFSET, HEADER_SCROLLED_OFFSET, NAV_REFERENCE_LINE};
use crate::error::PageError;

/// Page sections, in document order. `id()` is the element id each section
/// renders with; navigation and scroll tracking look elements up by it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Skills,
    Achievements,
    Projects,
    ContactForm,
    Contact,
}

impl SectionId {
    pub const ALL: [Self; 7] = [
        Self::Home,
        Self::About,
        Self::Skills,
        Self::Achievements,
        Self::Projects,
        Self::ContactForm,
        Self::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Achievements => "achievements",
            Self::Projects => "projects",
            Self::ContactForm => "contact-form",
            Self::Contact => "contact",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub section: SectionId,
    pub label: &'static str,
    pub icon: &'static str,
    pub on_mobile: bool,
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { section: SectionId::Home, label: "Home", icon: "⌂", on_mobile: true },
    NavItem { section: SectionId::About, label: "About", icon: "☺", on_mobile: true },
    NavItem { section: SectionId::Skills, label: "Skills", icon: "</>", on_mobile: true },
    NavItem { section: SectionId::Achievements, label: "Achievements", icon: "★", on_mobile: false },
    NavItem { section: SectionId::Projects, label: "Projects", icon: "▣", on_mobile: true },
    NavItem { section: SectionId::Contact, label: "Contact", icon: "✉", on_mobile: true },
];

pub fn mobile_nav_items() -> impl Iterator<Item = &'static NavItem> {
    NAV_ITEMS.iter().filter(|item| item.on_mobile)
}

/// Vertical extent of an element relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub top: f64,
    pub bottom: f64,
}

impl Span {
    fn crosses_reference_line(self) -> bool {
        self.top <= NAV_REFERENCE_LINE && self.bottom >= NAV_REFERENCE_LINE
    }
}

/// First section, in page order, straddling the reference line near the top
/// of the viewport. `None` means the caller keeps its current section.
pub fn section_in_view<F>(mut span_of: F) -> Option<SectionId>
where
    F: FnMut(SectionId) -> Option<Span>,
{
    SectionId::ALL
        .into_iter()
        .find(|&section| span_of(section).is_some_and(Span::crosses_reference_line))
}

/// Resolves the element for `section` and scrolls to it. A missing element
/// is an error and nothing scrolls; the caller then leaves the active
/// section alone.
pub fn navigate<E>(
    section: SectionId,
    lookup: impl FnOnce(&'static str) -> Option<E>,
    scroll: impl FnOnce(&E),
) -> Result<SectionId, PageError> {
    let element = lookup(section.id()).ok_or_else(|| PageError::MissingElement(section.id().into()))?;
    scroll(&element);
    Ok(section)
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y >= BACK_TO_TOP_OFFSET
}

pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLLED_OFFSET
}
