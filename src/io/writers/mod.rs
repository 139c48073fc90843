pub mod csv;
pub mod json;
pub mod terminal;

pub use self::csv::CsvWriter;
pub use json::JsonWriter;
pub use terminal::TerminalWriter;
