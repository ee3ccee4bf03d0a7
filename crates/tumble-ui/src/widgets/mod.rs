//! UI Widget components

pub mod pager;
pub mod view;

pub use pager::*;
pub use view::*;
