pub mod classpath;
pub mod composer;
pub mod modules;
pub mod path_mode;
pub mod render;
pub mod tokenizer;

pub use composer::{compose, ArgumentVector, ComposeInput, MainClass};
pub use modules::resolve_add_modules;
pub use path_mode::{resolve_path_mode, PathMode, PathSelection};
pub use tokenizer::{tokenize, tokenize_all};
