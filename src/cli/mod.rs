pub mod actions;
pub mod console;
pub mod menu;
