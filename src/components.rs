pub mod dropdown;
pub mod footer;
pub mod frame;
pub mod header;
pub mod helpers;
pub mod preview;
pub mod theme_control;
