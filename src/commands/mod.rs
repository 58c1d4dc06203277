pub mod catalog;
pub mod input;
pub mod interactive;
pub mod musicians;
