//*** START FILE: src/parsing/mod.rs ***//
pub mod schedule_parser;

pub use schedule_parser::{format_schedule_text, parse_raw_entries, parse_schedule_text, DATE_FORMAT};
//*** END FILE: src/parsing/mod.rs ***//
