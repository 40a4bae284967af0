pub mod infinite_scroll;
