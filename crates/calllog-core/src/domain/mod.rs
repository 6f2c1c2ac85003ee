pub mod call;
pub mod ids;
pub mod note;

pub use call::{Call, CallType, Direction};
pub use ids::{CallId, NoteId};
pub use note::Note;
