mod tests {
    use radiopixel_player::math8::{blend8, progress8, scale8, scale_between};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_blend8() {
        assert_eq!(blend8(255, 128, 128), 191);
        assert_eq!(blend8(0, 128, 255), 128);
        assert_eq!(blend8(255, 0, 128), 127);
        assert_eq!(blend8(255, 128, 0), 255);
    }

    #[test]
    fn test_progress8() {
        assert_eq!(progress8(0, 100), 0);
        assert_eq!(progress8(50, 100), 127);
        assert_eq!(progress8(100, 100), 255);
        assert_eq!(progress8(500, 0), 0);
    }

    #[test]
    fn test_scale_between() {
        assert_eq!(scale_between(1, 60, 0), 1);
        assert_eq!(scale_between(1, 60, 255), 60);
        assert_eq!(scale_between(1, 256, 128), 129);
        assert_eq!(scale_between(5, 0, 200), 5);
    }
}
