pub mod header;
pub mod parse;

pub use header::render_header;
pub use parse::{parse_header, ParsedTable};
