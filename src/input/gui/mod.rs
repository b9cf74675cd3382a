pub mod app;
pub mod presenter;
pub mod translate;
