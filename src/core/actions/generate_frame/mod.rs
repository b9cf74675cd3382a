pub mod frame_request;
#[allow(clippy::module_inception)]
pub mod generate_frame;
pub mod generate_frame_rayon;
pub mod ports;
