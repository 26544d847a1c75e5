pub mod explorer;
pub mod preview;
pub mod project;
