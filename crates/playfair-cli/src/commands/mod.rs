pub mod demo;
pub mod encrypt;
pub mod matrix;
