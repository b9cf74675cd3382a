pub mod generate_frame;
