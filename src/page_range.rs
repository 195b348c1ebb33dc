use crate::error::{Error, Result};
use std::collections::BTreeSet;

/// One comma-separated piece of a page specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Single(u32),
    Range { start: u32, end: u32 },
}

impl PageToken {
    /// Parse a single token like "5" or "6-8". Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if s.contains('-') {
            let parts: Vec<&str> = s.split('-').map(str::trim).collect();
            let &[start, end] = parts.as_slice() else {
                return Err(Error::InvalidPageRange(s.to_string()));
            };
            if start.is_empty() || end.is_empty() {
                return Err(Error::InvalidPageRange(s.to_string()));
            }

            let (Some(start), Some(end)) = (parse_number(start), parse_number(end)) else {
                return Err(Error::InvalidPageRange(s.to_string()));
            };
            if start > end {
                return Err(Error::InvalidPageRange(s.to_string()));
            }

            Ok(PageToken::Range { start, end })
        } else {
            parse_number(s)
                .map(PageToken::Single)
                .ok_or_else(|| Error::InvalidPageNumber(s.to_string()))
        }
    }

    /// Iterate the page numbers this token covers, inclusive.
    pub fn pages(&self) -> std::ops::RangeInclusive<u32> {
        match *self {
            PageToken::Single(page) => page..=page,
            PageToken::Range { start, end } => start..=end,
        }
    }
}

// Digits only: no sign, no radix prefix.
fn parse_number(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Parse a comma-separated list of tokens like "1,3,5-8"
pub fn parse_page_tokens(s: &str) -> Result<Vec<PageToken>> {
    s.split(',').map(PageToken::parse).collect()
}

/// Resolve a page specification into ascending, de-duplicated page numbers.
///
/// Page numbers are not checked against any document here, so "0" is
/// accepted; bounds are enforced when pages are copied out of a source.
pub fn parse_page_range(s: &str) -> Result<Vec<u32>> {
    let mut pages = BTreeSet::new();
    for token in parse_page_tokens(s)? {
        pages.extend(token.pages());
    }
    Ok(pages.into_iter().collect())
}

/// Render pages back into the comma-separated form `parse_page_range` accepts.
pub fn format_page_list(pages: &[u32]) -> String {
    pages
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page() {
        assert_eq!(PageToken::parse("6").unwrap(), PageToken::Single(6));
        assert_eq!(parse_page_range("6").unwrap(), vec![6]);
    }

    #[test]
    fn test_page_range() {
        assert_eq!(
            PageToken::parse("6-8").unwrap(),
            PageToken::Range { start: 6, end: 8 }
        );
        assert_eq!(parse_page_range("6-8").unwrap(), vec![6, 7, 8]);
    }

    #[test]
    fn test_comma_separated() {
        assert_eq!(
            parse_page_range("1,3,5-8").unwrap(),
            vec![1, 3, 5, 6, 7, 8]
        );
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(parse_page_range(" 2 , 4 - 5 ").unwrap(), vec![2, 4, 5]);
    }

    #[test]
    fn test_sorted_and_deduplicated() {
        assert_eq!(
            parse_page_range("8,1,3-5,2-4,3,8").unwrap(),
            vec![1, 2, 3, 4, 5, 8]
        );
    }

    #[test]
    fn test_single_element_range() {
        assert_eq!(parse_page_range("4-4").unwrap(), vec![4]);
    }

    #[test]
    fn test_zero_is_not_rejected() {
        assert_eq!(parse_page_range("0").unwrap(), vec![0]);
        assert_eq!(parse_page_range("0-2").unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_reparse_of_output_is_identical() {
        for spec in ["1,3,5-8", "10-12,1", "7,7,7", "3-6,4-9,20", "0,2"] {
            let pages = parse_page_range(spec).unwrap();
            let rendered = format_page_list(&pages);
            assert_eq!(parse_page_range(&rendered).unwrap(), pages, "{}", spec);
        }
    }

    #[test]
    fn test_invalid_range() {
        for spec in ["a-3", "5-2", "3-", "-3", "1-2-3", "1-b"] {
            let err = parse_page_range(spec).unwrap_err();
            assert!(
                matches!(err, Error::InvalidPageRange(_)),
                "{}: {:?}",
                spec,
                err
            );
        }
    }

    #[test]
    fn test_invalid_page_number() {
        assert_eq!(
            parse_page_range("1,x").unwrap_err(),
            Error::InvalidPageNumber("x".to_string())
        );
        assert!(parse_page_range("+3").is_err());
        assert!(parse_page_range("2.5").is_err());
    }

    #[test]
    fn test_empty_spec_is_rejected() {
        let err = parse_page_range("").unwrap_err();
        assert_eq!(err, Error::InvalidPageNumber(String::new()));
        assert!(parse_page_range("1,,2").is_err());
    }

    #[test]
    fn test_error_message_carries_token() {
        let err = parse_page_range("1, 9-3").unwrap_err();
        assert_eq!(err.to_string(), "Invalid page range: 9-3");
    }
}
