/// Activity score for a weekly commit series: the total number of commits.
/// An empty series scores 0.
pub fn score(weekly_commits: &[u64]) -> u64 {
    weekly_commits.iter().copied().fold(0u64, u64::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_scores_zero() {
        assert_eq!(score(&[]), 0);
    }

    #[test]
    fn score_is_the_sum() {
        let series: Vec<u64> = (0..52).collect();
        assert_eq!(score(&series), series.iter().sum::<u64>());
        assert_eq!(score(&[0, 0, 0]), 0);
        assert_eq!(score(&[7]), 7);
    }

    #[test]
    fn score_does_not_overflow() {
        assert_eq!(score(&[u64::MAX, 1]), u64::MAX);
    }
}
