//! Random candidate selection.

use rand::Rng;

/// How many results the search requests per page.
pub(crate) const PER_PAGE: usize = 8;

/// Pick a random index among the first eight results.
///
/// The draw is clamped to the actual result count, so a short result list
/// can never produce an out-of-range index. Returns `None` for an empty
/// list.
pub fn pick_index(result_count: usize, rng: &mut impl Rng) -> Option<usize> {
    let bound = result_count.min(PER_PAGE);
    if bound == 0 {
        return None;
    }
    Some(rng.gen_range(0..bound))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn never_exceeds_result_count() {
        let mut rng = StdRng::seed_from_u64(7);
        for count in 1..=12 {
            for _ in 0..200 {
                let idx = pick_index(count, &mut rng).unwrap();
                assert!(idx < count, "index {} out of range for {} results", idx, count);
                assert!(idx < PER_PAGE);
            }
        }
    }

    #[test]
    fn empty_results_yield_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_index(0, &mut rng), None);
    }
}
