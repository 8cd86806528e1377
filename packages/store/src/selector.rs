//! Selector state: the inputs that determine the next catalog fetch.

use serde::{Deserialize, Serialize};

/// Direction of the breed sort applied by the search endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// The value the search endpoint expects in its `sort=breed:` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// The combination of sort direction, breed filter, and page number.
///
/// Every mutation that changes which dogs match (sort flip, filter change)
/// resets the page to 1, since the old page offset is meaningless against the
/// new result set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selector {
    pub sort: SortDirection,
    /// `None` means no breed constraint; the search request must not carry a
    /// `breeds` parameter in that case.
    pub breed: Option<String>,
    /// 1-based page number, always ≥ 1.
    pub page: u32,
}

impl Default for Selector {
    fn default() -> Self {
        Self {
            sort: SortDirection::default(),
            breed: None,
            page: 1,
        }
    }
}

impl Selector {
    /// Dogs requested per page, mirroring the service's default page size.
    pub const PAGE_SIZE: u32 = 25;

    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-based offset for the `from` search parameter.
    pub fn offset(&self) -> u32 {
        (self.page - 1) * Self::PAGE_SIZE
    }

    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// No-op at page 1.
    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    pub fn toggle_sort(&mut self) {
        self.sort = self.sort.toggled();
        self.page = 1;
    }

    /// Set the breed filter from raw input; an empty or whitespace-only
    /// string clears the constraint.
    pub fn set_breed(&mut self, breed: &str) {
        let breed = breed.trim();
        self.breed = if breed.is_empty() {
            None
        } else {
            Some(breed.to_string())
        };
        self.page = 1;
    }
}
