pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// Whether the "back to top" control should show at vertical offset `offset`.
pub fn past_threshold(offset: f64) -> bool {
    offset >= SCROLL_TOP_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        assert!(!past_threshold(299.0));
        assert!(!past_threshold(299.9));
        assert!(past_threshold(300.0));
        assert!(past_threshold(4_000.0));
    }

    #[test]
    fn top_of_page_hides_the_control() {
        assert!(!past_threshold(0.0));
        assert!(!past_threshold(f64::NAN));
    }
}
