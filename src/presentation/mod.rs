pub mod console;
pub mod prompt;
