mod tests {
    use myrtio_matrix_composer::effect::FireEffect;
    use myrtio_matrix_composer::{ClockSettings, DrawContext, Effect, FrameBuffer, Instant};

    fn draw(fire: &mut FireEffect) -> FrameBuffer {
        let ctx = DrawContext::new(Instant::from_millis(0), 0, ClockSettings::default());
        let mut frame = FrameBuffer::default();
        fire.draw(&ctx, &mut frame);
        frame
    }

    #[test]
    fn test_first_frame_only_ignites_bottom_row() {
        let mut fire = FireEffect::new();
        fire.init(3);
        let frame = draw(&mut fire);

        for row in &fire.heat()[..15] {
            assert!(row.iter().all(|&heat| heat == 0));
        }
        for &heat in &fire.heat()[15] {
            assert!(heat == 0 || (160..255).contains(&heat));
        }
        for (x, y) in frame.lit_pixels() {
            assert_eq!(y, 15);
            assert!(fire.heat()[15][usize::from(x)] > 100);
        }
    }

    #[test]
    fn test_ignition_rate_is_about_sixty_percent() {
        let mut ignited = 0u32;
        let mut total = 0u32;
        for seed in 0..200 {
            let mut fire = FireEffect::new();
            fire.init(seed);
            draw(&mut fire);
            ignited += fire.heat()[15].iter().filter(|&&heat| heat > 0).count() as u32;
            total += 16;
        }
        let rate = f64::from(ignited) / f64::from(total);
        assert!((0.55..0.65).contains(&rate), "rate {rate}");
    }

    #[test]
    fn test_heat_rises() {
        let mut fire = FireEffect::new();
        fire.init(1);
        for _ in 0..30 {
            draw(&mut fire);
        }
        let warm_rows = fire.heat()[..15]
            .iter()
            .filter(|row| row.iter().any(|&heat| heat > 0))
            .count();
        assert!(warm_rows > 0);
    }

    #[test]
    fn test_lit_cells_match_heat_threshold() {
        let mut fire = FireEffect::new();
        fire.init(11);
        for _ in 0..40 {
            let frame = draw(&mut fire);
            for (y, row) in fire.heat().iter().enumerate() {
                for (x, &heat) in row.iter().enumerate() {
                    assert_eq!(frame.pixel(x as u8, y as u8), heat > 100);
                }
            }
        }
    }

    #[test]
    fn test_init_clears_the_field() {
        let mut fire = FireEffect::new();
        fire.init(8);
        for _ in 0..10 {
            draw(&mut fire);
        }
        fire.init(8);
        assert!(fire.heat().iter().flatten().all(|&heat| heat == 0));
    }
}
