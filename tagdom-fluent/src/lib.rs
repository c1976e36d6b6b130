pub mod check;
pub mod text;
pub mod time;

pub use check::{CheckError, Should, ShouldExt};
pub use text::AffixExt;
pub use time::{AgoExt, DaysExt};
