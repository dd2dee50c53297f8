//! Light/dark switch

use dioxus::prelude::*;
use folio_core::style;
use folio_core::ThemeMode;

use crate::ui::icons::{Icon, IconKind};

/// Shows the mode it switches to and hands clicks to the root composer.
#[component]
pub fn ThemeToggle(theme: ThemeMode, on_toggle: EventHandler<()>) -> Element {
    let label = theme.toggle_label();
    let icon = if theme.is_dark() { IconKind::Sun } else { IconKind::Moon };

    rsx! {
        button {
            class: style::theme_toggle(theme),
            r#type: "button",
            title: label,
            "aria-label": label,
            onclick: move |_| on_toggle.call(()),
            Icon { kind: icon, size: 18 }
        }
    }
}
