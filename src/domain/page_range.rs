use std::ops::RangeInclusive;

/// A 1-indexed, inclusive page selection. `None` bounds mean "to the end".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start: u32,
    pub end: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageRangeError {
    #[error("invalid page range '{0}': expected a page number like '3' or a span like '2-5'")]
    Malformed(String),
    #[error("page range {start}-{end} is outside the document's {total} pages")]
    OutOfBounds { start: u32, end: u32, total: u32 },
}

impl PageRange {
    pub fn all() -> Self {
        Self {
            start: 1,
            end: None,
        }
    }

    pub fn single(page: u32) -> Self {
        Self {
            start: page,
            end: Some(page),
        }
    }

    pub fn span(start: u32, end: u32) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Parses "N" or "N-M". Absent or blank input selects every page.
    pub fn parse(input: Option<&str>) -> Result<Self, PageRangeError> {
        let raw = match input.map(str::trim) {
            None | Some("") => return Ok(Self::all()),
            Some(raw) => raw,
        };

        let parse_page = |s: &str| {
            s.trim()
                .parse::<u32>()
                .map_err(|_| PageRangeError::Malformed(raw.to_string()))
        };

        match raw.split_once('-') {
            Some((start, end)) => Ok(Self::span(parse_page(start)?, parse_page(end)?)),
            None => Ok(Self::single(parse_page(raw)?)),
        }
    }

    /// Resolves the selection against a concrete page count. Selecting every
    /// page of an empty document yields an empty range.
    pub fn resolve(&self, total_pages: u32) -> Result<RangeInclusive<u32>, PageRangeError> {
        if total_pages == 0 && self.end.is_none() && self.start == 1 {
            return Ok(RangeInclusive::new(1, 0));
        }

        let end = self.end.unwrap_or(total_pages);
        let out_of_bounds = PageRangeError::OutOfBounds {
            start: self.start,
            end,
            total: total_pages,
        };

        if self.start == 0 || self.start > end || end > total_pages {
            return Err(out_of_bounds);
        }

        Ok(self.start..=end)
    }
}

impl Default for PageRange {
    fn default() -> Self {
        Self::all()
    }
}
