pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::duration2readable;
