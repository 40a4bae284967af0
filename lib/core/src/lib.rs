pub mod source;
pub mod watcher;
