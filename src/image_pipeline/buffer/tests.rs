#[cfg(test)]
mod tests {
    use crate::image_pipeline::buffer::{Channels, PixelBuffer};
    use crate::image_pipeline::common::error::VisionError;

    #[test]
    fn test_new_allocates_zeroed_buffer() {
        let image = PixelBuffer::new(4, 3, Channels::Rgb, 255).unwrap();

        assert_eq!(image.width(), 4);
        assert_eq!(image.height(), 3);
        assert_eq!(image.stride(), 12);
        assert_eq!(image.len(), 36);
        assert!(image.as_bytes().iter().all(|&b| b == 0));
        image.free();
    }

    #[test]
    fn test_new_rejects_zero_levels() {
        let result = PixelBuffer::new(4, 4, Channels::Gray, 0);
        assert!(matches!(result, Err(VisionError::InvalidLevels(0))));
    }

    #[test]
    fn test_new_rejects_empty_dimensions() {
        assert!(matches!(
            PixelBuffer::new(0, 4, Channels::Gray, 255),
            Err(VisionError::InvalidDimensions(0, 4))
        ));
        assert!(matches!(
            PixelBuffer::new(4, 0, Channels::Gray, 255),
            Err(VisionError::InvalidDimensions(4, 0))
        ));
    }

    #[test]
    fn test_channel_count_conversion() {
        assert_eq!(Channels::from_count(1).unwrap(), Channels::Gray);
        assert_eq!(Channels::from_count(3).unwrap(), Channels::Rgb);
        assert!(matches!(
            Channels::from_count(4),
            Err(VisionError::InvalidChannelConfiguration { actual: 4, .. })
        ));
    }

    #[test]
    fn test_from_raw_checks_length() {
        let ok = PixelBuffer::from_raw(2, 2, Channels::Rgb, 255, vec![7u8; 12]);
        assert!(ok.is_ok());

        let short = PixelBuffer::from_raw(2, 2, Channels::Rgb, 255, vec![7u8; 11]);
        assert!(matches!(short, Err(VisionError::DimensionMismatch(_))));
    }

    #[test]
    fn test_from_raw_rejects_overflowing_size() {
        let result = PixelBuffer::from_raw(usize::MAX / 2, 3, Channels::Rgb, 255, vec![0u8; 3]);
        assert!(matches!(result, Err(VisionError::InvalidDimensions(_, 3))));
    }

    #[test]
    fn test_addressing_helpers() {
        let mut image = PixelBuffer::new(3, 2, Channels::Rgb, 255).unwrap();
        image.set(2, 1, 1, 42);

        assert_eq!(image.get(2, 1, 1), 42);
        assert_eq!(image.as_bytes()[1 * 9 + 2 * 3 + 1], 42);
        assert_eq!(image.pixel(2, 1), &[0, 42, 0]);
        assert_eq!(image.row(1)[7], 42);

        assert_eq!(image.neighbor(2, 1, 0, 0, 1), Some(42));
        assert_eq!(image.neighbor(2, 1, 1, 0, 1), None);
        assert_eq!(image.neighbor(0, 0, -1, 0, 0), None);
        assert_eq!(image.neighbor(0, 0, 0, 0, 3), None);
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_bounds_panics() {
        let image = PixelBuffer::new(3, 2, Channels::Gray, 255).unwrap();
        image.get(3, 0, 0);
    }

    #[test]
    fn test_crop_honours_both_strides() {
        let mut src = PixelBuffer::new(5, 4, Channels::Rgb, 255).unwrap();
        for y in 0..4 {
            for x in 0..5 {
                for c in 0..3 {
                    src.set(x, y, c, (y * 50 + x * 10 + c) as u8);
                }
            }
        }

        let crop = src.crop(1, 2, 4, 4).unwrap();

        assert_eq!(crop.width(), 3);
        assert_eq!(crop.height(), 2);
        assert_eq!(crop.stride(), 9);
        assert_eq!(crop.levels(), 255);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(crop.pixel(x, y), src.pixel(x + 1, y + 2));
            }
        }
    }

    #[test]
    fn test_crop_rejects_out_of_range_rectangles() {
        let src = PixelBuffer::new(5, 4, Channels::Gray, 255).unwrap();

        assert!(matches!(src.crop(0, 0, 6, 4), Err(VisionError::InvalidParameter(_))));
        assert!(matches!(src.crop(2, 0, 2, 4), Err(VisionError::InvalidParameter(_))));
    }

    #[test]
    fn test_copy_from_requires_same_shape() {
        let src = PixelBuffer::from_raw(2, 1, Channels::Gray, 255, vec![1, 2]).unwrap();
        let mut dst = PixelBuffer::new(2, 1, Channels::Gray, 255).unwrap();
        dst.copy_from(&src).unwrap();
        assert_eq!(dst.as_bytes(), &[1, 2]);

        let mut rgb = PixelBuffer::new(2, 1, Channels::Rgb, 255).unwrap();
        assert!(matches!(rgb.copy_from(&src), Err(VisionError::DimensionMismatch(_))));
    }
}
