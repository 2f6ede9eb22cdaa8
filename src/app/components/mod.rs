pub mod crumblist;
pub mod menu_item;
pub mod menu_section;

pub use crumblist::Crumblist;
pub use menu_item::MenuItem;
pub use menu_section::MenuSection;
