//! C# output: rendering the constants class and checking the result parses
pub mod emitter;
pub mod syntax_check;
