pub mod errors;
pub mod mpeg4_configuration;
