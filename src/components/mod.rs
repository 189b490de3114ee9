pub mod app;
pub mod enemy_card;
pub mod progress_bar;
pub mod zone_menu;
pub mod zone_view;
