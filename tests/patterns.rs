mod tests {
    use radiopixel_player::color::{BLACK, GREEN, RED, Rgb, WHITE, fade_color};
    use radiopixel_player::pattern::{
        CandyCanePattern, DiagnosticPattern, FixedPattern, FlashPattern, GradientPattern,
        MarchPattern, MiniSparklePattern, MiniTwinklePattern, Pattern, PatternConfig,
        RainbowPattern, SparklePattern, StrobePattern, WipePattern, wrapping_delta,
    };
    use radiopixel_player::{FrameBuffer, PixelStrip, create_pattern};

    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    fn config(levels: [u8; 3]) -> PatternConfig {
        PatternConfig {
            colors: [RED, GREEN, BLUE],
            levels,
        }
    }

    fn lit(strip: &FrameBuffer<64>) -> usize {
        strip.frame().iter().filter(|pixel| **pixel != BLACK).count()
    }

    #[test]
    fn test_wrapping_delta() {
        assert_eq!(wrapping_delta(5, 8, 100), 3);
        assert_eq!(wrapping_delta(95, 5, 100), 10);
        assert_eq!(wrapping_delta(40, 40, 100), 0);
    }

    #[test]
    fn test_color_and_level_wrap() {
        let mut pattern = FlashPattern::new();
        pattern.configure(&PatternConfig {
            colors: [RED, GREEN, BLUE],
            levels: [1, 2, 3],
        });
        assert_eq!(pattern.color(3), RED);
        assert_eq!(pattern.color(5), BLUE);
        assert_eq!(pattern.level(4), 2);
    }

    #[test]
    fn test_durations() {
        let strip = FrameBuffer::<64>::new(1);
        assert_eq!(FlashPattern::new().duration(&strip), 4000);
        assert_eq!(RainbowPattern::new().duration(&strip), 2000);
        assert_eq!(SparklePattern::new().duration(&strip), 100);
        assert_eq!(MiniSparklePattern::new().duration(&strip), 100);
        assert_eq!(MiniTwinklePattern::new().duration(&strip), 1000);
        assert_eq!(MarchPattern::new().duration(&strip), 1000);
        assert_eq!(GradientPattern::new().duration(&strip), 1000);
        assert_eq!(StrobePattern::new().duration(&strip), 750);
        assert_eq!(FixedPattern::new().duration(&strip), 750);
        assert_eq!(CandyCanePattern::new().duration(&strip), 200);
        assert_eq!(DiagnosticPattern::new(1).duration(&strip), 40);
    }

    #[test]
    fn test_flash_blinks_then_fades() {
        let mut strip = FrameBuffer::<64>::with_len(10, 1);
        let mut pattern = FlashPattern::new();
        pattern.init_with(&mut strip, &config([0x80; 3]), 0);
        assert!(strip.frame().iter().all(|pixel| *pixel == RED));

        // t = 15, between the two blinks
        pattern.update(&mut strip, 200);
        assert!(strip.frame().iter().all(|pixel| *pixel == BLACK));

        // t = 45, halfway through the fade
        pattern.update(&mut strip, 600);
        assert!(strip.frame().iter().all(|pixel| *pixel == fade_color(RED, 127)));

        // t = 105, first blink of the second color
        pattern.update(&mut strip, 1400);
        assert!(strip.frame().iter().all(|pixel| *pixel == GREEN));
    }

    #[test]
    fn test_rainbow_lights_every_pixel() {
        let mut strip = FrameBuffer::<64>::with_len(30, 1);
        let mut pattern = RainbowPattern::new();
        pattern.init_with(&mut strip, &config([0x80; 3]), 0);
        assert_eq!(lit(&strip), 30);
        let first = strip.frame()[0];
        pattern.update(&mut strip, 1000);
        assert_ne!(strip.frame()[0], first);
    }

    #[test]
    fn test_sparkle_density_follows_level() {
        let mut strip = FrameBuffer::<64>::with_len(40, 7);
        let mut pattern = SparklePattern::new();
        pattern.init_with(&mut strip, &config([0, 0, 0]), 0);
        assert_eq!(lit(&strip), 1);

        strip.fill(WHITE);
        pattern.configure(&config([255, 0, 0]));
        pattern.begin_loop(&mut strip, 0);
        let count = lit(&strip);
        assert!(count >= 1 && count <= 40);
        assert!(strip.frame().iter().all(|pixel| [BLACK, RED, GREEN, BLUE].contains(pixel)));
    }

    #[test]
    fn test_sparkle_replaces_black_with_random_color() {
        let mut strip = FrameBuffer::<64>::with_len(20, 3);
        let mut pattern = SparklePattern::new();
        pattern.init_with(
            &mut strip,
            &PatternConfig {
                colors: [BLACK; 3],
                levels: [255, 0, 0],
            },
            0,
        );
        assert!(lit(&strip) > 0);
    }

    #[test]
    fn test_mini_sparkle_duty_cycle() {
        let mut strip = FrameBuffer::<64>::with_len(20, 5);
        let mut pattern = MiniSparklePattern::new();
        pattern.init_with(&mut strip, &config([255, 0, 0]), 0);
        assert!(lit(&strip) > 0);

        pattern.update(&mut strip, 25);
        assert!(lit(&strip) > 0);

        pattern.update(&mut strip, 26);
        assert_eq!(lit(&strip), 0);
    }

    #[test]
    fn test_mini_twinkle_lights_and_dims() {
        let mut strip = FrameBuffer::<64>::with_len(50, 11);
        let mut pattern = MiniTwinklePattern::new();
        pattern.init_with(&mut strip, &config([255, 0, 0]), 0);
        assert_eq!(lit(&strip), 0);

        pattern.update(&mut strip, 500);
        assert!(lit(&strip) > 0);

        // 999ms later everything lit before has faded out
        strip.fill(WHITE);
        pattern.update(&mut strip, 499);
        assert!(strip.frame().iter().all(|pixel| *pixel != WHITE));
    }

    #[test]
    fn test_mini_twinkle_lighting_accumulates_over_frames() {
        let mut strip = FrameBuffer::<64>::with_len(50, 11);
        let mut pattern = MiniTwinklePattern::new();
        pattern.init_with(&mut strip, &config([0x80, 0, 0]), 0);

        // 25 pixels per loop: a single 8ms frame is not enough for one
        for offset in [8, 16, 24, 32] {
            pattern.update(&mut strip, offset);
            assert_eq!(lit(&strip), 0, "lit early at {offset}ms");
        }
        pattern.update(&mut strip, 40);
        assert!(lit(&strip) > 0);
    }

    #[test]
    fn test_mini_twinkle_dimming_accumulates_across_loop_wrap() {
        let mut strip = FrameBuffer::<64>::with_len(50, 11);
        let mut pattern = MiniTwinklePattern::new();
        pattern.init_with(&mut strip, &config([0, 0, 0]), 0);
        pattern.update(&mut strip, 996);

        // 2ms is too short to fade
        strip.fill(WHITE);
        pattern.update(&mut strip, 998);
        assert!(strip.frame().iter().all(|pixel| *pixel == WHITE));

        // 4ms since the last fade, counted over the wrap
        pattern.update(&mut strip, 0);
        assert!(strip.frame().iter().all(|pixel| *pixel != WHITE));
    }

    #[test]
    fn test_march_segments() {
        let mut strip = FrameBuffer::<64>::with_len(24, 1);
        let mut pattern = MarchPattern::new();
        pattern.init_with(&mut strip, &config([8, 0, 0]), 0);
        // pixel 0 starts a red segment at the beginning of a loop
        assert_eq!(strip.frame()[0], BLACK);
        assert_eq!(strip.frame()[3], fade_color(RED, 63));
        assert_eq!(strip.frame()[8], BLACK);
        assert_eq!(strip.frame()[11], fade_color(GREEN, 63));
        assert_eq!(strip.frame()[19], fade_color(BLUE, 63));
    }

    #[test]
    fn test_march_without_width_renders_nothing() {
        let mut strip = FrameBuffer::<64>::with_len(24, 1);
        strip.fill(WHITE);
        let mut pattern = MarchPattern::new();
        pattern.init_with(&mut strip, &config([0, 0, 0]), 0);
        assert_eq!(lit(&strip), 24);
    }

    #[test]
    fn test_wipe_fades_back_half() {
        let mut strip = FrameBuffer::<64>::with_len(10, 1);
        let mut pattern = WipePattern::new();
        pattern.init_with(&mut strip, &config([0x80; 3]), 0);
        // front half of each band is dark
        assert_eq!(strip.frame()[0], BLACK);
        assert_eq!(strip.frame()[4], BLACK);
        // 9 * 255 / 10 = 229, (229 - 128) * 2 = 202
        assert_eq!(strip.frame()[9], fade_color(RED, 202));
    }

    #[test]
    fn test_gradient_maps_shift_each_loop() {
        let mut strip = FrameBuffer::<64>::with_len(16, 9);
        let mut pattern = GradientPattern::new();
        pattern.init_with(&mut strip, &config([0x80; 3]), 0);
        assert_eq!(pattern.source_map().len(), 16);
        assert_eq!(pattern.target_map().len(), 16);

        for _ in 0..20 {
            let previous = pattern.target_map().to_vec();
            pattern.begin_loop(&mut strip, 0);
            assert_eq!(pattern.source_map(), previous.as_slice());
            assert!(pattern.source_map().iter().all(|index| *index < 16));
            assert!(pattern.target_map().iter().all(|index| *index < 16));
        }
    }

    #[test]
    fn test_gradient_profiles() {
        let mut strip = FrameBuffer::<64>::with_len(16, 9);
        let mut pattern = GradientPattern::new();
        pattern.init_with(&mut strip, &config([0x80, 0, 0]), 0);
        assert_eq!(pattern.gradient().steps().len(), 6);
        assert_eq!(pattern.gradient().color_at(0x80), RED);
        assert_eq!(pattern.gradient().color_at(0x81), BLACK);

        pattern.configure(&config([0, 0, 0]));
        assert_eq!(pattern.gradient().steps().len(), 4);
        assert_eq!(pattern.gradient().color_at(85), GREEN);
        assert_eq!(pattern.gradient().color_at(255), RED);
        // configuring keeps the sample maps
        assert_eq!(pattern.source_map().len(), 16);
    }

    #[test]
    fn test_gradient_crossfade_ends() {
        let mut strip = FrameBuffer::<64>::with_len(16, 9);
        let mut pattern = GradientPattern::new();
        pattern.init_with(&mut strip, &config([0, 0, 0]), 0);
        let from: Vec<Rgb> = pattern
            .source_map()
            .iter()
            .map(|index| pattern.gradient().color_at((usize::from(*index) * 255 / 16) as u8))
            .collect();
        assert_eq!(strip.frame(), from.as_slice());
    }

    #[test]
    fn test_strobe_flashes_on_new_third() {
        let mut strip = FrameBuffer::<64>::with_len(8, 1);
        let mut pattern = StrobePattern::new();
        pattern.init_with(&mut strip, &config([0x80; 3]), 0);
        assert_eq!(lit(&strip), 0);

        pattern.update(&mut strip, 240);
        assert_eq!(lit(&strip), 0);
        pattern.update(&mut strip, 256);
        assert!(strip.frame().iter().all(|pixel| *pixel == GREEN));
        pattern.update(&mut strip, 264);
        assert_eq!(lit(&strip), 0);
        pattern.update(&mut strip, 504);
        assert!(strip.frame().iter().all(|pixel| *pixel == BLUE));
        pattern.update(&mut strip, 8);
        assert!(strip.frame().iter().all(|pixel| *pixel == RED));
    }

    #[test]
    fn test_fixed_steps_through_thirds() {
        let mut strip = FrameBuffer::<64>::with_len(9, 1);
        let mut pattern = FixedPattern::new();
        pattern.init_with(&mut strip, &config([0x80; 3]), 0);
        assert_eq!(
            strip.frame(),
            &[RED, BLACK, BLACK, RED, BLACK, BLACK, RED, BLACK, BLACK]
        );

        pattern.update(&mut strip, 300);
        assert_eq!(
            strip.frame(),
            &[BLACK, GREEN, BLACK, BLACK, GREEN, BLACK, BLACK, GREEN, BLACK]
        );
    }

    #[test]
    fn test_candy_cane_flips_halfway() {
        let mut strip = FrameBuffer::<64>::with_len(4, 1);
        let mut pattern = CandyCanePattern::new();
        pattern.init_with(&mut strip, &config([0x80; 3]), 0);
        assert_eq!(strip.frame(), &[GREEN, BLUE, GREEN, BLUE]);

        pattern.update(&mut strip, 100);
        assert_eq!(strip.frame(), &[RED, GREEN, RED, GREEN]);
    }

    #[test]
    fn test_diagnostic_code_stripe() {
        let mut strip = FrameBuffer::<64>::with_len(9, 1);
        let mut pattern = DiagnosticPattern::new(2);
        pattern.init_with(&mut strip, &config([0x80; 3]), 0);
        assert_eq!(
            strip.frame(),
            &[WHITE, WHITE, BLACK, BLACK, BLACK, WHITE, WHITE, BLACK, BLACK]
        );
    }

    #[test]
    fn test_diagnostic_huge_code_lights_everything() {
        let mut strip = FrameBuffer::<64>::with_len(9, 1);
        let mut pattern = DiagnosticPattern::new(u32::MAX);
        pattern.init_with(&mut strip, &config([0x80; 3]), 0);
        assert_eq!(lit(&strip), 9);
        assert!(strip.frame().iter().all(|pixel| *pixel == WHITE));
    }

    #[test]
    fn test_empty_strip_renders_nothing() {
        let mut strip = FrameBuffer::<64>::with_len(0, 1);
        for raw in (0..=11u8).chain([200]) {
            let mut pattern = create_pattern(raw);
            for levels in [[0, 0, 0], [1, 1, 1], [0x80; 3], [255; 3]] {
                let duration = pattern.duration(&strip);
                pattern.init_with(&mut strip, &config(levels), 0);
                pattern.begin_loop(&mut strip, duration / 2);
                pattern.update(&mut strip, duration - 1);
            }
        }
        assert!(strip.frame().is_empty());
    }

    #[test]
    fn test_every_pattern_survives_a_full_loop() {
        let mut strip = FrameBuffer::<64>::with_len(37, 13);
        for raw in (0..=11u8).chain([200]) {
            let mut pattern = create_pattern(raw);
            for levels in [[0, 0, 0], [1, 1, 1], [7, 7, 7], [255; 3]] {
                let duration = pattern.duration(&strip);
                pattern.init_with(&mut strip, &config(levels), 0);
                for offset in (0..duration).step_by(8) {
                    pattern.update(&mut strip, offset);
                }
                pattern.begin_loop(&mut strip, 0);
            }
        }
    }
}
