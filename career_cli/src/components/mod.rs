/// Component module exports
pub mod level_bar;
pub mod list_editor;
pub mod table;
pub mod text_input;
pub mod theme;

pub use level_bar::LevelBar;
pub use list_editor::ListEditorState;
pub use table::{create_row, TableRow, TableWidget};
pub use text_input::{InputOutcome, TextInput};
