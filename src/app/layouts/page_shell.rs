use dioxus::prelude::*;

use crate::app::components::{FooterActions, NavigationMenu};
use crate::app::pages::routes::resolve_path;
use crate::config::{BrandConfig, ShellOptions};
use crate::domain::models::{ActionOutcome, FooterGroup, NavigationEntry};
use crate::shared::hooks::{apply_theme, use_panel, use_theme};

/// Page shell: side panel, toggle control and the caller's content.
///
/// The panel starts open on every mount. The content slot is opaque; the
/// shell only decides whether the panel next to it is shown.
#[component]
pub fn PageShell(
    brand: BrandConfig,
    entries: Vec<NavigationEntry>,
    #[props(default)] options: ShellOptions,
    #[props(default)] footer: Vec<FooterGroup>,
    #[props(default)] current_path: String,
    children: Element,
) -> Element {
    let mut panel = use_panel();
    let theme = use_theme();

    let handle_outcome = move |outcome: ActionOutcome| match outcome {
        ActionOutcome::ApplyTheme(selected) => apply_theme(theme, selected),
        ActionOutcome::Navigate(path) => {
            navigator().push(resolve_path(&path));
        }
    };

    let is_open = panel.is_open();
    let visibility = (panel.visibility)();
    let state = visibility.as_str();
    let theme_class = theme().as_str();
    let toggle_label = visibility.toggle_label();
    let toggle_glyph = if is_open { "⟨" } else { "☰" };

    rsx! {
        div {
            class: "c-shell c-shell--{state} {theme_class}",
            "data-panel": "{state}",

            if is_open {
                aside { class: "c-shell__panel",
                    BrandHeader { brand: brand.clone() }

                    div { class: "c-shell__panel-content",
                        NavigationMenu {
                            entries: entries.clone(),
                            current_path: current_path.clone(),
                            show_labels: options.show_labels,
                        }
                    }

                    if !footer.is_empty() {
                        FooterActions {
                            groups: footer.clone(),
                            show_labels: options.show_labels,
                            on_outcome: handle_outcome,
                        }
                    }
                }
            }

            div { class: "c-shell__inset",
                header { class: "c-shell__header",
                    button {
                        class: "c-shell__toggle",
                        r#type: "button",
                        aria_label: "{toggle_label}",
                        aria_expanded: "{is_open}",
                        title: "{toggle_label}",
                        onclick: move |_| panel.toggle(),
                        "{toggle_glyph}"
                    }
                    if !is_open {
                        span { class: "c-shell__header-title", "{brand.title}" }
                    }
                }
                main { class: "c-shell__content",
                    {children}
                }
            }
        }
    }
}

#[component]
fn BrandHeader(brand: BrandConfig) -> Element {
    rsx! {
        div { class: "c-shell__brand",
            if let Some(logo) = brand.logo {
                img {
                    class: "c-shell__brand-logo",
                    src: "{logo}",
                    alt: "{brand.title} logo",
                    width: "32",
                    height: "32",
                }
            }
            h1 { class: "c-shell__brand-title", "{brand.title}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::app::pages::Route;
    use crate::config::DashboardConfig;
    use crate::domain::models::{IconId, Theme};
    use crate::shared::hooks::UsePanelReturn;

    #[derive(Clone, Copy)]
    struct ShellHandles {
        panel: UsePanelReturn,
        theme: Signal<Theme>,
    }

    type HandleSlot = Rc<RefCell<Option<ShellHandles>>>;

    #[derive(Clone)]
    struct HarnessProps {
        config: DashboardConfig,
        slot: HandleSlot,
    }

    // Owns the shell state and config so the test can drive them from outside
    #[allow(non_snake_case)]
    fn Harness(props: HarnessProps) -> Element {
        let panel = use_panel();
        let theme = use_theme();
        use_context_provider(|| panel);
        use_context_provider(|| theme);
        use_context_provider(|| props.config.clone());
        props.slot.borrow_mut().replace(ShellHandles { panel, theme });

        rsx! {
            Router::<Route> {}
        }
    }

    fn mount(config: DashboardConfig) -> (VirtualDom, ShellHandles) {
        let slot: HandleSlot = Rc::new(RefCell::new(None));
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                config,
                slot: slot.clone(),
            },
        );
        dom.rebuild_in_place();
        let handles = (*slot.borrow()).expect("harness did not render");
        (dom, handles)
    }

    fn rerender(dom: &mut VirtualDom) -> String {
        let _ = dom.render_immediate_to_vec();
        dioxus_ssr::render(dom)
    }

    fn count(html: &str, needle: &str) -> usize {
        html.matches(needle).count()
    }

    const PANEL: &str = r#"class="c-shell__panel""#;
    const TOGGLE: &str = r#"class="c-shell__toggle""#;
    const MENU_ITEM: &str = r#"class="c-nav-menu__item""#;

    #[test]
    fn test_panel_visible_on_mount() {
        let (dom, _) = mount(DashboardConfig::builtin());
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(PANEL));
        assert!(html.contains(TOGGLE));
        assert!(html.contains(r#"data-panel="open""#));
    }

    #[test]
    fn test_toggle_hides_then_shows_panel() {
        let (mut dom, handles) = mount(DashboardConfig::builtin());
        let mut panel = handles.panel;

        dom.in_runtime(|| panel.toggle());
        let closed = rerender(&mut dom);
        assert!(!closed.contains(PANEL));
        assert_eq!(count(&closed, MENU_ITEM), 0);
        assert!(closed.contains(TOGGLE));
        assert!(closed.contains(r#"data-panel="closed""#));

        dom.in_runtime(|| panel.toggle());
        let reopened = rerender(&mut dom);
        assert!(reopened.contains(PANEL));
        assert!(reopened.contains(r#"data-panel="open""#));
    }

    #[test]
    fn test_menu_renders_one_item_per_entry_in_order() {
        let config = DashboardConfig {
            entries: vec![
                NavigationEntry::new("Dashboard", "/dashboard", IconId::Home),
                NavigationEntry::new("Settings", "/dashboard/settings", IconId::Settings),
            ],
            ..DashboardConfig::builtin()
        };
        let (dom, _) = mount(config);
        let html = dioxus_ssr::render(&dom);

        assert_eq!(count(&html, MENU_ITEM), 2);
        let dashboard = html
            .find(r#"class="c-nav-menu__text">Dashboard<"#)
            .expect("Dashboard link missing");
        let settings = html
            .find(r#"class="c-nav-menu__text">Settings<"#)
            .expect("Settings link missing");
        assert!(dashboard < settings);
        assert!(!html.contains(r#"class="c-nav-menu__text">Metrics<"#));
    }

    #[test]
    fn test_empty_menu_renders_no_items() {
        let config = DashboardConfig {
            entries: Vec::new(),
            ..DashboardConfig::builtin()
        };
        let (dom, _) = mount(config);
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(PANEL));
        assert_eq!(count(&html, MENU_ITEM), 0);
    }

    #[test]
    fn test_rerender_without_changes_is_identical() {
        let (mut dom, _) = mount(DashboardConfig::builtin());
        let first = dioxus_ssr::render(&dom);
        let second = rerender(&mut dom);
        assert_eq!(first, second);
    }

    #[test]
    fn test_selected_theme_is_rendered_on_shell() {
        let (mut dom, handles) = mount(DashboardConfig::builtin());
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("c-shell c-shell--open light"));

        dom.in_runtime(|| apply_theme(handles.theme, Theme::Dark));
        let dark = rerender(&mut dom);
        assert!(dark.contains("c-shell c-shell--open dark"));
        assert!(!dark.contains("c-shell c-shell--open light"));
    }
}
