pub mod countdown;
pub mod questions;
