mod tests {
    use myrtio_matrix_composer::{FRAME_BYTES, FrameBuffer, PixelMap};

    #[test]
    fn test_new_frame_is_blank() {
        let frame = FrameBuffer::default();
        assert!(frame.is_blank());
        assert_eq!(frame.lit_count(), 0);
        assert_eq!(frame.as_bytes(), &[0; FRAME_BYTES]);
    }

    #[test]
    fn test_set_pixel_packs_msb_first() {
        let mut frame = FrameBuffer::new(&PixelMap::SEGMENTED);
        frame.set_pixel(0, 0, true);
        assert_eq!(frame.as_bytes()[0], 0x80);

        frame.set_pixel(1, 0, true);
        assert_eq!(frame.as_bytes()[0], 0xC0);

        // Physical index 232
        frame.set_pixel(15, 15, true);
        assert_eq!(frame.as_bytes()[29], 0x80);

        // Physical index 15
        frame.set_pixel(0, 1, true);
        assert_eq!(frame.as_bytes()[1], 0x01);
        assert_eq!(frame.lit_count(), 4);
    }

    #[test]
    fn test_every_pixel_reads_back() {
        for map in [&PixelMap::SEGMENTED, &PixelMap::SERPENTINE] {
            let mut frame = FrameBuffer::new(map);
            for y in 0..16 {
                for x in 0..16 {
                    frame.set_pixel(x, y, true);
                    assert!(frame.pixel(x, y));
                    assert_eq!(frame.lit_count(), 1);
                    frame.set_pixel(x, y, false);
                    assert!(frame.is_blank());
                }
            }
        }
    }

    #[test]
    fn test_set_pixel_off_clears_only_that_bit() {
        let mut frame = FrameBuffer::default();
        frame.fill();
        frame.set_pixel(3, 0, false);
        assert!(!frame.pixel(3, 0));
        assert!(frame.pixel(2, 0));
        assert_eq!(frame.lit_count(), 255);
    }

    #[test]
    fn test_out_of_range_pixels_are_ignored() {
        let mut frame = FrameBuffer::default();
        frame.set_pixel(16, 0, true);
        frame.set_pixel(0, 16, true);
        frame.set_pixel(200, 200, true);
        assert!(frame.is_blank());
        assert!(!frame.pixel(16, 3));
    }

    #[test]
    fn test_fill_and_clear() {
        let mut frame = FrameBuffer::default();
        frame.fill();
        assert_eq!(frame.lit_count(), 256);
        assert_eq!(frame.as_bytes(), &[0xFF; FRAME_BYTES]);
        frame.clear();
        assert!(frame.is_blank());
    }

    #[test]
    fn test_wiring_changes_bytes_not_pixels() {
        let mut segmented = FrameBuffer::new(&PixelMap::SEGMENTED);
        let mut serpentine = FrameBuffer::new(&PixelMap::SERPENTINE);
        for frame in [&mut segmented, &mut serpentine] {
            frame.set_pixel(0, 1, true);
            frame.set_pixel(9, 4, true);
        }
        assert_ne!(segmented.as_bytes(), serpentine.as_bytes());
        assert!(segmented.lit_pixels().eq(serpentine.lit_pixels()));
    }

    #[test]
    fn test_lit_pixels_in_row_order() {
        let mut frame = FrameBuffer::default();
        frame.set_pixel(5, 9, true);
        frame.set_pixel(2, 1, true);
        frame.set_pixel(14, 1, true);
        let lit: Vec<(u8, u8)> = frame.lit_pixels().collect();
        assert_eq!(lit, vec![(2, 1), (14, 1), (5, 9)]);
    }
}
