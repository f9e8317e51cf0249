//! Open files, the active file, and their in-memory buffers.

mod session;
mod template;

pub use session::{EditorError, EditorSession, EditorSnapshot, OpenFile, OpenFileSnapshot};
pub use template::{default_content, TemplateKind};
