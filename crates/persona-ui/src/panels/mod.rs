pub mod editor;
pub mod history;
pub mod settings;
