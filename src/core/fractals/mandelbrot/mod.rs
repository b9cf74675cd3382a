pub mod algorithm;
pub mod julia;
