/// Header line dpkg prints above the status legend
const DESIRED_HEADER_PREFIX: &str = "Desired=";

/// Column header line, e.g. `||/ Name  Version  Architecture  Description`
const COLUMN_HEADER_PREFIX: &str = "||/";

/// Shape of a listing as seen by [`ListingFormatCheck`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingFormat {
    /// No non-empty lines at all
    Empty,
    /// The familiar `dpkg -l` table with its header
    DpkgTable,
    /// Text that does not carry the dpkg header
    Unrecognized { reason: String },
}

impl ListingFormat {
    pub fn is_recognized(&self) -> bool {
        !matches!(self, ListingFormat::Unrecognized { .. })
    }
}

/// ListingFormatCheck - detects drift in the listing tool's output format
///
/// The parser depends on a convention owned by dpkg (status marker first,
/// then four positional columns). This check looks for the table header so
/// a changed or foreign format is noticed instead of silently parsed.
pub struct ListingFormatCheck;

impl ListingFormatCheck {
    pub fn inspect(output: &str) -> ListingFormat {
        let mut non_empty = output.lines().filter(|line| !line.trim().is_empty());

        let Some(first) = non_empty.next() else {
            return ListingFormat::Empty;
        };

        if !first.starts_with(DESIRED_HEADER_PREFIX) {
            return ListingFormat::Unrecognized {
                reason: format!(
                    "first line does not start with '{}': {}",
                    DESIRED_HEADER_PREFIX,
                    first.trim_end()
                ),
            };
        }

        if !non_empty.any(|line| line.starts_with(COLUMN_HEADER_PREFIX)) {
            return ListingFormat::Unrecognized {
                reason: format!("column header line '{}' is missing", COLUMN_HEADER_PREFIX),
            };
        }

        ListingFormat::DpkgTable
    }
}
