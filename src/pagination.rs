//! Offset/limit pagination over in-memory sequences.

use crate::error::CatalogError;

/// A page of results plus the size of the collection it was sliced from.
///
/// `total_count` is always the pre-slice length of the (already filtered)
/// sequence handed to [`paginate`], never the length of `items`.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: usize,
}

/// Validated pagination bounds.
///
/// An absent offset means "start at the beginning"; an absent limit means
/// "the rest of the sequence."
#[derive(Debug, Clone, Copy, Default)]
pub struct PageArgs {
    offset: Option<usize>,
    limit: Option<usize>,
}

impl PageArgs {
    pub fn new(offset: Option<usize>, limit: Option<usize>) -> Self {
        Self { offset, limit }
    }

    /// Validate raw transport-layer bounds.
    ///
    /// Negative values are caller errors, not values to clamp.
    pub fn from_raw(offset: Option<i32>, limit: Option<i32>) -> Result<Self, CatalogError> {
        Ok(Self {
            offset: check_bound("offset", offset)?,
            limit: check_bound("limit", limit)?,
        })
    }
}

fn check_bound(name: &str, value: Option<i32>) -> Result<Option<usize>, CatalogError> {
    match value {
        None => Ok(None),
        Some(v) if v < 0 => Err(CatalogError::InvalidArgument(format!(
            "{name} must be non-negative, got {v}"
        ))),
        Some(v) => Ok(Some(v as usize)),
    }
}

/// Slice `items` to the requested window.
///
/// Out-of-range offsets yield an empty page, not an error, and
/// `total_count` still reports the length of the sequence passed in.
pub fn paginate<T>(items: Vec<T>, args: PageArgs) -> Page<T> {
    let total_count = items.len();
    let offset = args.offset.unwrap_or(0);
    let items = match args.limit {
        Some(limit) => items.into_iter().skip(offset).take(limit).collect(),
        None => items.into_iter().skip(offset).collect(),
    };
    Page { items, total_count }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_pagination_returns_the_whole_sequence() {
        let page = paginate(vec![1, 2, 3], PageArgs::new(Some(0), Some(3)));
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.total_count, 3);
    }

    #[test]
    fn total_count_is_the_pre_slice_length() {
        let page = paginate(vec![1, 2, 3, 4, 5], PageArgs::new(Some(1), Some(2)));
        assert_eq!(page.items, vec![2, 3]);
        assert_eq!(page.total_count, 5);
    }

    #[test]
    fn out_of_range_offset_yields_an_empty_page() {
        let page = paginate(vec![1, 2, 3], PageArgs::new(Some(7), Some(2)));
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 3);
    }

    #[test]
    fn missing_bounds_default_to_the_full_sequence() {
        let page = paginate(vec![1, 2, 3], PageArgs::default());
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.total_count, 3);
    }

    #[test]
    fn missing_limit_takes_the_rest_of_the_sequence() {
        let page = paginate(vec![1, 2, 3, 4], PageArgs::new(Some(2), None));
        assert_eq!(page.items, vec![3, 4]);
        assert_eq!(page.total_count, 4);
    }

    #[test]
    fn limit_past_the_end_is_clamped() {
        let page = paginate(vec![1, 2], PageArgs::new(Some(1), Some(10)));
        assert_eq!(page.items, vec![2]);
        assert_eq!(page.total_count, 2);
    }

    #[test]
    fn empty_sequence_paginates_to_an_empty_page() {
        let page = paginate(Vec::<i32>::new(), PageArgs::new(Some(0), Some(10)));
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 0);
    }

    #[test]
    fn negative_bounds_are_rejected() {
        assert!(matches!(
            PageArgs::from_raw(Some(-1), None),
            Err(CatalogError::InvalidArgument(_))
        ));
        assert!(matches!(
            PageArgs::from_raw(None, Some(-5)),
            Err(CatalogError::InvalidArgument(_))
        ));
    }
}
