//! Embassy tasks

mod console;
mod effect;

pub use console::console_task;
pub use effect::effect_task;
