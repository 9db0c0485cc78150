mod tests {
    use myrtio_matrix_composer::{PixelMap, PixelMapError};

    #[test]
    fn test_segmented_is_bijective() {
        assert!(PixelMap::from_rows(*PixelMap::SEGMENTED.rows()).is_ok());
    }

    #[test]
    fn test_serpentine_is_bijective() {
        assert!(PixelMap::from_rows(*PixelMap::SERPENTINE.rows()).is_ok());
    }

    #[test]
    fn test_segmented_wiring() {
        let map = PixelMap::SEGMENTED;
        assert_eq!(map.physical_index(0, 0), Some(0));
        assert_eq!(map.physical_index(7, 0), Some(7));
        assert_eq!(map.physical_index(8, 0), Some(16));
        assert_eq!(map.physical_index(0, 1), Some(15));
        assert_eq!(map.physical_index(8, 2), Some(32));
        assert_eq!(map.physical_index(0, 2), Some(48));
        assert_eq!(map.physical_index(15, 15), Some(232));
    }

    #[test]
    fn test_serpentine_wiring() {
        let map = PixelMap::SERPENTINE;
        assert_eq!(map.physical_index(0, 0), Some(0));
        assert_eq!(map.physical_index(15, 0), Some(15));
        assert_eq!(map.physical_index(15, 1), Some(16));
        assert_eq!(map.physical_index(0, 1), Some(31));
        assert_eq!(map.physical_index(0, 15), Some(255));
    }

    #[test]
    fn test_out_of_range_has_no_index() {
        let map = PixelMap::default();
        assert_eq!(map.physical_index(16, 0), None);
        assert_eq!(map.physical_index(0, 16), None);
        assert_eq!(map.physical_index(255, 255), None);
    }

    #[test]
    fn test_logical_position_inverts_physical_index() {
        let map = PixelMap::SEGMENTED;
        for y in 0..16 {
            for x in 0..16 {
                let index = map.physical_index(x, y).unwrap();
                assert_eq!(map.logical_position(index), (x, y));
            }
        }
    }

    #[test]
    fn test_from_rows_rejects_duplicates() {
        let mut table = *PixelMap::SERPENTINE.rows();
        table[3][4] = table[0][0];
        assert_eq!(
            PixelMap::from_rows(table),
            Err(PixelMapError::Duplicate {
                index: 0,
                first: (0, 0),
                second: (4, 3),
            })
        );
    }
}
