pub mod load_style;
