//! Dioxus portfolio UI

pub mod components;
pub mod icons;
pub mod platform;
pub mod sections;
pub mod theme;

use dioxus::prelude::*;
use folio_core::ThemeMode;
use tracing::debug;

use crate::ui::sections::{
    About, Contact, Experience, Footer, Header, Hero, Projects, Skills,
};
use crate::ui::theme::inject_global_css;

/// Root composer: owns the theme and hands it to every section.
#[allow(non_snake_case)]
pub fn App() -> Element {
    let mut theme = use_signal(ThemeMode::default);

    // Seeded once from the platform; no preference leaves it light.
    use_effect(move || {
        spawn(async move {
            let preferred = ThemeMode::from_preference(platform::prefers_dark().await);
            if preferred != *theme.peek() {
                debug!(theme = preferred.as_str(), "applying preferred color scheme");
                theme.set(preferred);
            }
        });
    });

    let on_toggle = move |_| {
        let next = theme.peek().toggle();
        debug!(theme = next.as_str(), "theme toggled");
        theme.set(next);
    };

    rsx! {
        Page { theme: theme(), on_toggle }
    }
}

/// The whole page for one theme.
#[component]
pub fn Page(theme: ThemeMode, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        {inject_global_css()}

        div { class: theme.root_class(),
            Header { theme, on_toggle }
            main {
                Hero { theme }
                About { theme }
                Skills { theme }
                Experience { theme }
                Projects { theme }
                Contact { theme }
            }
            Footer { theme }
        }
    }
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;
    use crate::ui::sections::ProjectGrid;
    use folio_core::{Category, Field};

    fn render_page(theme: ThemeMode) -> String {
        #[component]
        fn Fixture(theme: ThemeMode) -> Element {
            rsx! { Page { theme, on_toggle: move |_| {} } }
        }

        let mut vdom = VirtualDom::new_with_props(Fixture, FixtureProps { theme });
        vdom.rebuild_in_place();
        let html = dioxus_ssr::render(&vdom);

        // Markup only; the stylesheet names every class.
        match html.split_once("</style>") {
            Some((_, markup)) => markup.to_string(),
            None => html,
        }
    }

    fn render_grid(category: Category) -> String {
        #[component]
        fn Fixture(category: Category) -> Element {
            rsx! { ProjectGrid { theme: ThemeMode::Light, category } }
        }

        let mut vdom = VirtualDom::new_with_props(Fixture, FixtureProps { category });
        vdom.rebuild_in_place();
        dioxus_ssr::render(&vdom)
    }

    #[test]
    fn test_light_page_has_no_dark_modifiers() {
        let html = render_page(ThemeMode::Light);
        assert!(html.contains(r#"class="app""#));
        assert!(!html.contains("--dark"));
    }

    #[test]
    fn test_dark_page_marks_root_and_blocks() {
        let html = render_page(ThemeMode::Dark);
        assert!(html.contains(r#"class="app dark""#));
        assert!(html.contains("surface-footer--dark"));
        assert!(html.contains("theme-toggle--dark"));
    }

    #[test]
    fn test_double_toggle_renders_identically() {
        let theme = ThemeMode::Light;
        assert_eq!(render_page(theme), render_page(theme.toggle().toggle()));
    }

    #[test]
    fn test_page_renders_every_section_in_order() {
        let html = render_page(ThemeMode::Light);
        let positions: Vec<usize> = ["home", "about", "skills", "experience", "projects", "contact"]
            .iter()
            .map(|id| {
                html.find(&format!(r#"id="{id}""#))
                    .unwrap_or_else(|| panic!("missing section {id}"))
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("<footer"));
    }

    #[test]
    fn test_sections_start_hidden_before_reveal() {
        let html = render_page(ThemeMode::Light);
        assert!(html.contains("reveal reveal--up"));
        assert!(!html.contains("is-visible"));
    }

    #[test]
    fn test_header_starts_unscrolled_with_menu_closed() {
        let html = render_page(ThemeMode::Light);
        assert!(!html.contains("site-header--scrolled"));
        assert!(html.contains("Open menu"));
        assert!(!html.contains("mobile-menu"));
    }

    #[test]
    fn test_contact_form_renders_required_fields_without_banners() {
        let html = render_page(ThemeMode::Light);
        for field in Field::ALL {
            assert!(html.contains(&format!(r#"name="{}""#, field.key())));
        }
        assert!(html.contains("Send Message"));
        assert!(!html.contains("banner-success"));
        assert!(!html.contains("banner-error"));
    }

    #[test]
    fn test_project_grid_filters_cards() {
        let count = |html: &str| html.matches("project-card").count();

        assert_eq!(count(&render_grid(Category::All)), 2);
        assert_eq!(count(&render_grid(Category::Dashboard)), 1);
        assert_eq!(count(&render_grid(Category::Website)), 1);
        assert!(render_grid(Category::Website).contains("Portfolio Website"));
    }

    #[test]
    fn test_footer_shows_current_year() {
        use chrono::Datelike;

        let html = render_page(ThemeMode::Light);
        let year = chrono::Local::now().year();
        assert!(html.contains(&format!("© {year}")));
    }
}
