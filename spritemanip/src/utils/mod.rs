pub mod img_stuffs;
pub mod misc;
pub mod palette_file;
