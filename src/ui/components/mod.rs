pub mod card_panel;
pub mod detail;
pub mod idiom_board;
pub mod level_grid;
pub mod level_list;
pub mod menu;
pub mod quiz_board;
pub mod range_bar;
pub mod search_panel;
