//! Text rendering of console screens

pub mod badge;
pub mod render;
pub mod table;

pub use badge::{Badge, BadgeColor};
pub use render::*;
pub use table::{Cell, Table};
