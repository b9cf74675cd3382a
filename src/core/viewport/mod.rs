pub mod transforms;
#[allow(clippy::module_inception)]
pub mod viewport;
