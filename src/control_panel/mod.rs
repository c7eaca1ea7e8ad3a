pub mod action;
pub mod impl_console;
pub mod impl_gui;
pub mod interface;
