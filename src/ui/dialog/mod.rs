mod intent;
mod reducer;
mod state;

pub use intent::DialogIntent;
pub use reducer::DialogReducer;
pub use state::{DialogKind, DialogState};
