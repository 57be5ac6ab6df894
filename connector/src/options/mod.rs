pub mod offset_options;
