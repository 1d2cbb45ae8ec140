pub mod core;
pub mod format;
pub mod main;
pub mod run_effect;
pub mod selected_file;
pub mod view;
