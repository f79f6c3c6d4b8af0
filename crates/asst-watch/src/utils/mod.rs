pub mod files;
pub mod time;
