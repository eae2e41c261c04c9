pub mod flash;
pub mod form;
pub mod path;
