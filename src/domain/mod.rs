pub mod board;
pub mod enums;
pub mod task;
pub mod views;

pub use board::{Board, COMPLETION_POINTS};
pub use enums::{Filter, Focus, UiMode};
pub use task::Task;
pub use views::{
    active_rows, completed_rows, completed_stamp, RowRef, ACTIVE_EMPTY_HINT, COMPLETED_EMPTY_HINT,
};
