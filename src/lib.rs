// lib.rs

pub mod builtins;
pub mod cli;
pub mod completion;
pub mod engine;
pub mod error;
pub mod history;
pub mod input;
pub mod logging;
pub mod parser;
pub mod repl;
pub mod transform;
pub mod util;

pub use engine::EchoEngine;
pub use error::EchoError;
pub use input::EchoInput;
pub use transform::Transform;
