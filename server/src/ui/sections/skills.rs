//! Skill bars

use dioxus::prelude::*;
use folio_core::content::{Skill, SKILLS, SKILLS_INTRO};
use folio_core::style::{self, Motion, Surface};
use folio_core::ThemeMode;

use crate::ui::components::SectionHeading;
use crate::ui::platform::use_reveal;

#[component]
pub fn Skills(theme: ThemeMode) -> Element {
    let latch = use_reveal("skills");
    let visible = latch().is_revealed();

    rsx! {
        section { id: "skills", class: style::section(theme, Surface::Base),
            div { class: "container",
                SectionHeading { theme, title: "My Skills", intro: SKILLS_INTRO, visible }

                div { class: "skills-grid",
                    for (index, skill) in SKILLS.iter().enumerate() {
                        SkillCard { key: "{skill.name}", theme, skill: *skill, index, visible }
                    }
                }
            }
        }
    }
}

/// One skill; the bar grows to the skill level once the section is seen.
#[component]
fn SkillCard(theme: ThemeMode, skill: Skill, index: usize, visible: bool) -> Element {
    let card_class = format!(
        "{} {}",
        style::themed(theme, "skill-card"),
        style::reveal(Motion::Up, visible)
    );
    let bar_class = style::join([
        style::skill_bar(theme).as_str(),
        if visible { "is-visible" } else { "" },
    ]);
    let level = skill.percent();
    // Bars start filling 200ms after the cards, one step per index.
    let bar_style = format!(
        "--level: {level}%; transition-delay: {}ms;",
        200 + 100 * index
    );

    rsx! {
        div { class: "{card_class}", style: style::stagger(100, index),
            div { class: "skill-head",
                span { "{skill.name}" }
                span { class: style::muted_text(theme), "{level}%" }
            }
            div { class: "skill-track",
                div {
                    class: "{bar_class}",
                    style: "{bar_style}",
                    "role": "progressbar",
                    "aria-valuenow": "{level}",
                    "aria-valuemin": "0",
                    "aria-valuemax": "100",
                }
            }
        }
    }
}
