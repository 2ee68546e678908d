pub mod event;
pub mod resource;
pub mod rule;
