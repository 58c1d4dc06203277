pub mod bands;
pub mod catalog;
pub mod musicians;
pub mod options;
