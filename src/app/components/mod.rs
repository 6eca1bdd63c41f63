pub mod card;
pub mod footer_actions;
pub mod navigation_menu;

pub use card::Card;
pub use footer_actions::FooterActions;
pub use navigation_menu::{is_active_path, menu_items, MenuItem, NavigationMenu};
