//! Fixed-size, 1-indexed pages over an ordered result list.

/// Slice out page `page_number` (1-indexed) of `results`.
///
/// Out-of-range pages, page 0 and a zero page size all yield an empty slice.
pub fn page<T>(results: &[T], page_number: usize, page_size: usize) -> &[T] {
    if page_number == 0 || page_size == 0 {
        return &[];
    }

    let start = (page_number - 1).saturating_mul(page_size);
    if start >= results.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(results.len());
    &results[start..end]
}

/// Number of pages needed to show `len` items, `ceil(len / page_size)`.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 10)]
    #[case(1, 10)]
    #[case(10, 10)]
    #[case(12, 10)]
    #[case(100, 10)]
    #[case(101, 7)]
    #[case(5, 1)]
    #[case(3, 50)]
    fn test_pages_reconstruct_results(#[case] len: usize, #[case] page_size: usize) {
        let results: Vec<usize> = (0..len).collect();

        let rebuilt: Vec<usize> = (1..=page_count(len, page_size))
            .flat_map(|p| page(&results, p, page_size).iter().copied())
            .collect();

        assert_eq!(rebuilt, results);
    }

    #[test]
    fn test_last_page_is_clipped() {
        let results: Vec<u32> = (1..=12).collect();

        assert_eq!(page(&results, 1, 10), &results[..10]);
        assert_eq!(page(&results, 2, 10), &[11, 12]);
        assert_eq!(page_count(results.len(), 10), 2);
    }

    #[rstest]
    #[case(0, 10)]
    #[case(3, 10)]
    #[case(1, 0)]
    #[case(usize::MAX, 10)]
    fn test_out_of_range_page_is_empty(#[case] page_number: usize, #[case] page_size: usize) {
        let results: Vec<u32> = (1..=12).collect();
        assert!(page(&results, page_number, page_size).is_empty());
    }

    #[test]
    fn test_page_count_zero_size() {
        assert_eq!(page_count(12, 0), 0);
    }
}
