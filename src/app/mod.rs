// Application layer: the pharmacy screen and what it presents.

pub mod permission;
pub mod render;
pub mod screen;
