pub mod catalog;
pub mod dates;
pub mod fortune;
pub mod input;
pub mod share;
pub mod streak;
