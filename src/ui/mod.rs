//! UI module - display projection and reusable components

pub mod components;
pub mod page;
