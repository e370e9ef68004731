/// UI components for the application shell
///
/// Layout pieces (top bar, side bar, shell) and the small widgets they are built from.

pub mod icon_button;
pub mod icons;
pub mod shell;
pub mod sidebar;
pub mod sidebar_nav_list;
pub mod top_bar;
pub mod user_info;
