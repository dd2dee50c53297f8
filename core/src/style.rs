//! Theme-dependent class names
//!
//! Every themed block gets a `--dark` modifier in dark mode, so toggling
//! the theme twice always yields the same class lists. The stylesheet that
//! gives these classes meaning lives with the UI.

use crate::theme::ThemeMode;

/// Append the dark modifier of `block` when the theme is dark.
pub fn themed(theme: ThemeMode, block: &str) -> String {
    if theme.is_dark() {
        format!("{block} {block}--dark")
    } else {
        block.to_string()
    }
}

/// Join class fragments, skipping empty ones.
pub fn join<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Section background
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// White / near black (hero, skills, projects)
    Base,
    /// Light grey / dark grey (about, experience, contact)
    Raised,
    /// Footer band
    Footer,
}

impl Surface {
    fn block(&self) -> &'static str {
        match self {
            Surface::Base => "surface-base",
            Surface::Raised => "surface-raised",
            Surface::Footer => "surface-footer",
        }
    }
}

pub fn section(theme: ThemeMode, surface: Surface) -> String {
    format!("section {}", themed(theme, surface.block()))
}

/// Fixed header; transparent until the page is scrolled past the threshold.
pub fn header(theme: ThemeMode, scrolled: bool) -> String {
    if scrolled {
        format!("site-header {}", themed(theme, "site-header--scrolled"))
    } else {
        "site-header".to_string()
    }
}

pub fn brand(theme: ThemeMode) -> String {
    themed(theme, "brand")
}

pub fn nav_link(theme: ThemeMode) -> String {
    themed(theme, "nav-link")
}

pub fn mobile_menu(theme: ThemeMode) -> String {
    themed(theme, "mobile-menu")
}

pub fn theme_toggle(theme: ThemeMode) -> String {
    themed(theme, "theme-toggle")
}

pub fn muted_text(theme: ThemeMode) -> String {
    themed(theme, "text-muted")
}

pub fn accent_text(theme: ThemeMode) -> String {
    themed(theme, "text-accent")
}

/// Underline bar below section titles
pub fn accent_bar(theme: ThemeMode) -> String {
    themed(theme, "accent-bar")
}

pub fn card(theme: ThemeMode) -> String {
    themed(theme, "card")
}

pub fn icon_link(theme: ThemeMode) -> String {
    themed(theme, "icon-link")
}

/// Round social buttons in the contact section
pub fn social_button(theme: ThemeMode) -> String {
    themed(theme, "social-btn")
}

/// Call-to-action button variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Primary,
    Outline,
}

pub fn button(theme: ThemeMode, kind: ButtonKind) -> String {
    let block = match kind {
        ButtonKind::Primary => "btn-primary",
        ButtonKind::Outline => "btn-outline",
    };
    format!("btn {}", themed(theme, block))
}

pub fn submit_button(theme: ThemeMode, submitting: bool) -> String {
    let base = button(theme, ButtonKind::Primary);
    if submitting {
        format!("{base} btn--busy")
    } else {
        base
    }
}

pub fn filter_button(theme: ThemeMode, active: bool) -> String {
    let block = if active {
        "filter-btn--active"
    } else {
        "filter-btn--idle"
    };
    format!("filter-btn {}", themed(theme, block))
}

/// Pill labels under projects and experience entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipKind {
    Category,
    Tech,
}

pub fn chip(theme: ThemeMode, kind: ChipKind) -> String {
    let block = match kind {
        ChipKind::Category => "chip-category",
        ChipKind::Tech => "chip-tech",
    };
    format!("chip {}", themed(theme, block))
}

pub fn input(theme: ThemeMode) -> String {
    themed(theme, "field")
}

pub fn skill_bar(theme: ThemeMode) -> String {
    themed(theme, "skill-bar")
}

/// Entrance animation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Up,
    FromLeft,
    FromRight,
    Fade,
    Zoom,
}

impl Motion {
    fn modifier(&self) -> &'static str {
        match self {
            Motion::Up => "reveal--up",
            Motion::FromLeft => "reveal--left",
            Motion::FromRight => "reveal--right",
            Motion::Fade => "reveal--fade",
            Motion::Zoom => "reveal--zoom",
        }
    }
}

/// Classes for an element animated in once `visible` becomes true.
pub fn reveal(motion: Motion, visible: bool) -> String {
    join(["reveal", motion.modifier(), if visible { "is-visible" } else { "" }])
}

/// Inline transition delay for staggered children.
pub fn stagger(step_ms: u32, index: usize) -> String {
    format!("transition-delay: {}ms;", step_ms as usize * index)
}

/// Inline delay for on-mount `intro` animations.
pub fn animation_delay(ms: u32) -> String {
    format!("animation-delay: {ms}ms;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themed_modifier() {
        assert_eq!(themed(ThemeMode::Light, "card"), "card");
        assert_eq!(themed(ThemeMode::Dark, "card"), "card card--dark");
    }

    #[test]
    fn test_toggle_twice_restores_classes() {
        let render = |t: ThemeMode| {
            vec![
                section(t, Surface::Raised),
                header(t, true),
                filter_button(t, true),
                chip(t, ChipKind::Tech),
                submit_button(t, false),
            ]
        };
        let light = ThemeMode::Light;
        assert_ne!(render(light), render(light.toggle()));
        assert_eq!(render(light), render(light.toggle().toggle()));
    }

    #[test]
    fn test_header_transparent_until_scrolled() {
        assert_eq!(header(ThemeMode::Dark, false), "site-header");
        assert_eq!(
            header(ThemeMode::Dark, true),
            "site-header site-header--scrolled site-header--scrolled--dark"
        );
    }

    #[test]
    fn test_filter_button_states() {
        assert_eq!(
            filter_button(ThemeMode::Light, true),
            "filter-btn filter-btn--active"
        );
        assert_eq!(
            filter_button(ThemeMode::Dark, false),
            "filter-btn filter-btn--idle filter-btn--idle--dark"
        );
    }

    #[test]
    fn test_reveal_classes() {
        assert_eq!(reveal(Motion::Up, false), "reveal reveal--up");
        assert_eq!(reveal(Motion::Zoom, true), "reveal reveal--zoom is-visible");
    }

    #[test]
    fn test_submit_button_busy() {
        assert!(submit_button(ThemeMode::Light, true).ends_with("btn--busy"));
        assert!(!submit_button(ThemeMode::Light, false).contains("busy"));
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger(100, 0), "transition-delay: 0ms;");
        assert_eq!(stagger(100, 3), "transition-delay: 300ms;");
        assert_eq!(animation_delay(200), "animation-delay: 200ms;");
    }
}
