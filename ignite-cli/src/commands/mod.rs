pub mod create;
pub mod delete;
pub mod list;
pub mod menu;
pub mod recent;
pub mod rename;
pub mod run;
