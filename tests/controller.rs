mod tests {
    use strip_sections::{CommandChannel, Rgb, Section, Strip};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[test]
    fn test_local_index_translates_to_buffer_index() {
        let channel = CommandChannel::<4>::new();
        let mut strip = Strip::<10, 4>::new(channel.receiver());
        let section = Section::try_new(2, 5, 10).unwrap();

        strip.controller(section).set(0, RED);
        strip.controller(section).set(3, BLUE);

        assert_eq!(strip.get(2), RED);
        assert_eq!(strip.get(5), BLUE);
        assert_eq!(strip.get(1), BLACK);
        assert_eq!(strip.get(6), BLACK);
    }

    #[test]
    fn test_out_of_range_set_redirects_to_nearest_pixel() {
        let channel = CommandChannel::<4>::new();
        let mut strip = Strip::<10, 4>::new(channel.receiver());
        let section = Section::try_new(2, 5, 10).unwrap();

        strip.controller(section).set(100, RED);
        assert_eq!(strip.get(5), RED);
        // neighbors untouched
        assert_eq!(strip.get(6), BLACK);
    }

    #[test]
    fn test_clamped_access_matches_nearest_in_range_index() {
        let channel = CommandChannel::<4>::new();
        let mut strip = Strip::<10, 4>::new(channel.receiver());
        let section = Section::try_new(2, 5, 10).unwrap();

        strip.controller(section).set(100, RED);
        let clamped = strip.controller(section).get(3);
        let direct = strip.controller(section).get(100);
        assert_eq!(direct, clamped);
    }

    #[test]
    fn test_set_range_clamps_both_bounds() {
        let channel = CommandChannel::<4>::new();
        let mut strip = Strip::<10, 4>::new(channel.receiver());
        let section = Section::try_new(2, 5, 10).unwrap();

        strip.controller(section).set_range(1, 100, RED);

        assert_eq!(strip.get(2), BLACK);
        assert_eq!(strip.get(3), RED);
        assert_eq!(strip.get(5), RED);
        assert_eq!(strip.get(6), BLACK);
    }

    #[test]
    fn test_inverted_range_sets_nothing() {
        let channel = CommandChannel::<4>::new();
        let mut strip = Strip::<10, 4>::new(channel.receiver());
        let section = Section::try_new(2, 5, 10).unwrap();

        strip.controller(section).set_range(3, 1, RED);
        assert!(strip.snapshot().iter().all(|&p| p == BLACK));
    }

    #[test]
    fn test_fill_covers_exactly_the_section() {
        let channel = CommandChannel::<4>::new();
        let mut strip = Strip::<10, 4>::new(channel.receiver());
        let section = Section::try_new(2, 5, 10).unwrap();

        strip.controller(section).fill(BLUE);

        for index in 0..10 {
            let expected = if (2..=5).contains(&index) { BLUE } else { BLACK };
            assert_eq!(strip.get(index), expected);
        }
    }

    #[test]
    fn test_iteration_is_ascending_and_restartable() {
        let channel = CommandChannel::<4>::new();
        let mut strip = Strip::<10, 4>::new(channel.receiver());
        let section = Section::try_new(2, 5, 10).unwrap();

        let mut controller = strip.controller(section);
        assert_eq!(controller.iter().count(), 4);

        for (index, pixel) in controller.iter_mut().enumerate() {
            *pixel = Rgb {
                r: index as u8,
                g: 0,
                b: 0,
            };
        }
        // a second pass sees the same pixels in the same order
        let reds: Vec<u8> = controller.iter().map(|p| p.r).collect();
        assert_eq!(reds, vec![0, 1, 2, 3]);

        assert_eq!(strip.get(2).r, 0);
        assert_eq!(strip.get(5).r, 3);
    }

    #[test]
    fn test_direct_strip_surface_clamps_like_a_section() {
        let channel = CommandChannel::<4>::new();
        let mut strip = Strip::<10, 4>::new(channel.receiver());

        strip.set(100, RED);
        assert_eq!(strip.get(9), RED);
        assert_eq!(strip.get(100), RED);

        strip.off();
        strip.set_range(8, 100, BLUE);
        assert_eq!(strip.get(7), BLACK);
        assert_eq!(strip.get(8), BLUE);
        assert_eq!(strip.get(9), BLUE);
    }
}
