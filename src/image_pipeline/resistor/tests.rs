#[cfg(test)]
mod tests {
    use crate::image_pipeline::buffer::{Channels, PixelBuffer};
    use crate::image_pipeline::color::HsvRange;
    use crate::image_pipeline::common::error::VisionError;
    use crate::image_pipeline::resistor::{
        decode_resistance, describe_resistance, detect_band_colors, BandColor, BandTable,
        ColorBand, FoundColor, Resistance, INVALID_RESISTANCE,
    };

    // HSV bytes that unpack inside the default windows
    const GREEN: [u8; 3] = [73, 80, 100];
    const BLACK: [u8; 3] = [20, 0, 50];
    const RED: [u8; 3] = [10, 175, 200];

    fn found(x: usize, color: BandColor) -> FoundColor {
        FoundColor { x, color }
    }

    fn hsv_with_columns(width: usize, height: usize, columns: &[(usize, [u8; 3])]) -> PixelBuffer {
        let mut image = PixelBuffer::new(width, height, Channels::Rgb, 255).unwrap();
        for &(x, hsv) in columns {
            for y in 0..height {
                image.pixel_mut(x, y).copy_from_slice(&hsv);
            }
        }
        image
    }

    #[test]
    fn test_digits_follow_color_code() {
        let digits: Vec<u32> = BandColor::ALL.iter().map(|c| c.digit()).collect();
        assert_eq!(digits, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_color_names() {
        assert_eq!(BandColor::Orange.to_string(), "Orange");
        assert_eq!(BandColor::from_name("brown"), Some(BandColor::Brown));
        assert_eq!(BandColor::from_name("Violet"), Some(BandColor::Purple));
        assert_eq!(BandColor::from_name("Silver"), None);
    }

    #[test]
    fn test_default_table() {
        let table = BandTable::default();

        assert_eq!(table.len(), 8);
        let reds = table.bands().iter().filter(|b| b.color == BandColor::Red).count();
        assert_eq!(reds, 3);
        assert_eq!(table.bands()[3].range, HsvRange::new(102, 108, 29, 35, 37, 42));
    }

    #[test]
    fn test_decode_green_black_red() {
        let bands = [
            found(5, BandColor::Green),
            found(10, BandColor::Black),
            found(15, BandColor::Red),
        ];

        let resistance = decode_resistance(&bands).unwrap();

        assert_eq!(
            resistance,
            Resistance {
                ohms: 5000,
                tolerance_percent: 5
            }
        );
        assert_eq!(resistance.to_string(), "5000 Ohm ±5%");
    }

    #[test]
    fn test_decode_ignores_extra_bands() {
        let bands = [
            found(1, BandColor::Red),
            found(2, BandColor::Red),
            found(3, BandColor::Brown),
            found(4, BandColor::Orange),
        ];

        assert_eq!(decode_resistance(&bands).unwrap().ohms, 220);
    }

    #[test]
    fn test_decode_largest_multiplier() {
        let bands = [
            found(1, BandColor::White),
            found(2, BandColor::White),
            found(3, BandColor::White),
        ];

        assert_eq!(decode_resistance(&bands).unwrap().ohms, 99_000_000_000);
    }

    #[test]
    fn test_decode_underflow() {
        let bands = [found(1, BandColor::Red), found(2, BandColor::Black)];

        assert!(matches!(
            decode_resistance(&bands),
            Err(VisionError::DecodeUnderflow(2))
        ));
        assert_eq!(describe_resistance(&bands), INVALID_RESISTANCE);
        assert_eq!(describe_resistance(&[]), INVALID_RESISTANCE);
    }

    #[test]
    fn test_found_colors_sort_by_column_then_name() {
        let mut bands = vec![
            found(9, BandColor::Red),
            found(3, BandColor::Red),
            found(3, BandColor::Black),
        ];

        bands.sort();

        assert_eq!(
            bands,
            vec![
                found(3, BandColor::Black),
                found(3, BandColor::Red),
                found(9, BandColor::Red)
            ]
        );
    }

    #[test]
    fn test_detect_bands_left_to_right() {
        let hsv = hsv_with_columns(20, 3, &[(15, RED), (5, GREEN), (10, BLACK)]);

        let bands = detect_band_colors(&hsv, &BandTable::default()).unwrap();

        assert_eq!(
            bands,
            vec![
                found(5, BandColor::Green),
                found(10, BandColor::Black),
                found(15, BandColor::Red)
            ]
        );
        assert_eq!(describe_resistance(&bands), "5000 Ohm ±5%");
    }

    #[test]
    fn test_detect_records_first_pixel_in_raster_order() {
        let mut hsv = PixelBuffer::new(10, 4, Channels::Rgb, 255).unwrap();
        hsv.pixel_mut(8, 0).copy_from_slice(&GREEN);
        hsv.pixel_mut(2, 3).copy_from_slice(&GREEN);

        let bands = detect_band_colors(&hsv, &BandTable::default()).unwrap();

        assert_eq!(bands, vec![found(8, BandColor::Green)]);
    }

    #[test]
    fn test_detect_nothing_in_background() {
        let hsv = PixelBuffer::new(6, 6, Channels::Rgb, 255).unwrap();

        let bands = detect_band_colors(&hsv, &BandTable::default()).unwrap();

        assert!(bands.is_empty());
    }

    #[test]
    fn test_duplicate_windows_report_each_match() {
        let window = HsvRange::new(0, 21, 63, 75, 70, 100);
        let table = BandTable::new(vec![
            ColorBand::new(BandColor::Red, window),
            ColorBand::new(BandColor::Red, window),
        ]);
        let hsv = hsv_with_columns(4, 2, &[(1, RED)]);

        let bands = detect_band_colors(&hsv, &table).unwrap();

        assert_eq!(bands, vec![found(1, BandColor::Red), found(1, BandColor::Red)]);
    }

    #[test]
    fn test_detect_requires_three_channels() {
        let gray = PixelBuffer::new(4, 4, Channels::Gray, 255).unwrap();

        assert!(matches!(
            detect_band_colors(&gray, &BandTable::default()),
            Err(VisionError::InvalidChannelConfiguration { .. })
        ));
    }
}
