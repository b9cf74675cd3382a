pub mod linear_palette;
