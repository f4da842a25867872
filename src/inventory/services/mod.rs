mod listing_format;
mod listing_parser;

pub use listing_format::{ListingFormat, ListingFormatCheck};
pub use listing_parser::{ListingParser, ParsedListing, INSTALLED_MARKER};
