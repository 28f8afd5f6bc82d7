// Shell module
// Everything the user sees: menu, prompts, rendering

pub mod menu;
pub mod prompt;
pub mod render;

pub use menu::MenuAction;
pub use prompt::{Prompter, TerminalPrompter};
pub use render::Renderer;
