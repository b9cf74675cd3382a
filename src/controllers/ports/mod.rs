pub mod image_sink;
