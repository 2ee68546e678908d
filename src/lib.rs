pub mod config;
pub mod fixtures;
pub mod ical;
pub mod init;
pub mod labels;
pub mod model;
pub mod snapshot;
pub mod style;
pub mod view;
