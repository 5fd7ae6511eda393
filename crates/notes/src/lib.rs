//! Notes directory resolution and note lookup for `noman`.

mod dir;
mod error;
mod lookup;

pub use dir::{default_notes_dir, DirOrigin, NotesDir, DEFAULT_SUB_DIR};
pub use error::{NoteError, Result};
pub use lookup::{find_note, find_notes, note_pattern, read_note, SearchDepth};
