mod tests {
    use strip_sections::Section;

    const STRIP_LEN: usize = 10;

    #[test]
    fn test_try_new_valid() {
        let section = Section::try_new(2, 5, STRIP_LEN).unwrap();
        assert_eq!(section.start(), 2);
        assert_eq!(section.end(), 5);
        assert_eq!(section.len(), 4);
    }

    #[test]
    fn test_try_new_whole_strip() {
        let section = Section::try_new(0, STRIP_LEN - 1, STRIP_LEN).unwrap();
        assert_eq!(section.len(), STRIP_LEN);
    }

    #[test]
    fn test_try_new_rejects_inverted_bounds() {
        assert!(Section::try_new(5, 2, STRIP_LEN).is_err());
    }

    #[test]
    fn test_try_new_rejects_end_past_strip() {
        assert!(Section::try_new(0, STRIP_LEN, STRIP_LEN).is_err());
        assert!(Section::try_new(0, usize::MAX, STRIP_LEN).is_err());
    }

    #[test]
    fn test_try_new_rejects_single_pixel() {
        assert!(Section::try_new(3, 3, STRIP_LEN).is_err());
    }

    #[test]
    fn test_len_matches_bounds() {
        for start in 0..STRIP_LEN - 1 {
            for end in start + 1..STRIP_LEN {
                let section = Section::try_new(start, end, STRIP_LEN).unwrap();
                assert_eq!(section.len(), end - start + 1);
            }
        }
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = Section::try_new(0, 4, STRIP_LEN).unwrap();
        let b = Section::try_new(3, 6, STRIP_LEN).unwrap();
        let c = Section::try_new(7, 9, STRIP_LEN).unwrap();

        assert_eq!(a.overlaps(b), b.overlaps(a));
        assert!(a.overlaps(b));
        assert_eq!(a.overlaps(c), c.overlaps(a));
        assert!(!a.overlaps(c));
    }

    #[test]
    fn test_overlap_with_self() {
        let a = Section::try_new(2, 7, STRIP_LEN).unwrap();
        assert!(a.overlaps(a));
    }

    #[test]
    fn test_overlap_detects_nesting() {
        // inner's endpoints touch neither of outer's bounds
        let outer = Section::try_new(0, 9, STRIP_LEN).unwrap();
        let inner = Section::try_new(3, 5, STRIP_LEN).unwrap();
        assert!(outer.overlaps(inner));
        assert!(inner.overlaps(outer));
    }

    #[test]
    fn test_adjacent_sections_do_not_overlap() {
        let a = Section::try_new(0, 4, STRIP_LEN).unwrap();
        let b = Section::try_new(5, 9, STRIP_LEN).unwrap();
        assert!(!a.overlaps(b));
        assert!(!b.overlaps(a));
    }

    #[test]
    fn test_contains() {
        let section = Section::try_new(2, 5, STRIP_LEN).unwrap();
        assert!(!section.contains(1));
        assert!(section.contains(2));
        assert!(section.contains(5));
        assert!(!section.contains(6));
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let section = Section::try_new(2, 5, STRIP_LEN).unwrap();
        assert_eq!(section.clamp(0), 2);
        assert_eq!(section.clamp(9), 5);
        assert_eq!(section.clamp(4), 4);
        assert_eq!(section.clamp(section.clamp(9)), section.clamp(9));
    }

    #[test]
    fn test_value_equality() {
        let a = Section::try_new(2, 5, STRIP_LEN).unwrap();
        let b = Section::try_new(2, 5, STRIP_LEN).unwrap();
        let c = Section::try_new(2, 6, STRIP_LEN).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
