use dioxus::prelude::*;

/// Content card. `interactive` cards sharpen and lift on hover.
#[component]
pub fn Card(
    title: Option<String>,
    subtitle: Option<String>,
    interactive: Option<bool>,
    children: Element,
) -> Element {
    let interactive = interactive.unwrap_or(false);
    let interactive_class = if interactive { "c-card--interactive" } else { "" };

    rsx! {
        figure {
            class: "c-card {interactive_class}",
            if title.is_some() || subtitle.is_some() {
                figcaption {
                    class: "c-card__header",
                    if let Some(title) = title {
                        h3 { class: "c-card__title", "{title}" }
                    }
                    if let Some(subtitle) = subtitle {
                        p { class: "c-card__subtitle", "{subtitle}" }
                    }
                }
            }
            div {
                class: "c-card__body",
                {children}
            }
        }
    }
}
