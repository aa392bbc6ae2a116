pub mod consts;
pub mod errors;
pub mod obu_header;
pub mod obu_type;
pub mod reader;
