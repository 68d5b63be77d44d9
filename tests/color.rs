mod tests {
    use radiopixel_player::color::{
        BLACK, Rgb, WHITE, blend_colors, color_wheel, fade_color, rgb_from_u32, rgb_to_u32,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    #[test]
    fn test_blend_colors() {
        assert_eq!(blend_colors(RED, BLUE, 0), RED);
        assert_eq!(blend_colors(RED, BLUE, 255), BLUE);
        assert_eq!(
            blend_colors(RED, BLUE, 128),
            Rgb {
                r: 127,
                g: 0,
                b: 128
            }
        );
        assert_eq!(blend_colors(WHITE, BLACK, 255), BLACK);
        assert_eq!(blend_colors(WHITE, BLACK, 0), WHITE);
    }

    #[test]
    fn test_fade_color() {
        assert_eq!(fade_color(WHITE, 255), WHITE);
        assert_eq!(fade_color(WHITE, 0), BLACK);
        assert_eq!(
            fade_color(WHITE, 128),
            Rgb {
                r: 128,
                g: 128,
                b: 128
            }
        );
        assert_eq!(fade_color(RED, 128), Rgb { r: 128, g: 0, b: 0 });
    }

    #[test]
    fn test_color_wheel_is_lit() {
        for hue in 0..=255u8 {
            assert_ne!(color_wheel(hue), BLACK);
        }
        assert_ne!(color_wheel(0), color_wheel(128));
    }

    #[test]
    fn test_packed_colors() {
        assert_eq!(rgb_from_u32(0x00ff_8010), Rgb::new(0xff, 0x80, 0x10));
        assert_eq!(rgb_to_u32(Rgb::new(0x20, 0x40, 0xff)), 0x0020_40ff);
        assert_eq!(rgb_to_u32(rgb_from_u32(0x00c0_1900)), 0x00c0_1900);
    }
}
