pub mod buffer;
pub mod command;
pub mod config;
pub mod console;
pub mod cursor;
pub mod editor;
pub mod logging;
