#[cfg(test)]
mod tests {
    use crate::image_pipeline::buffer::{Channels, PixelBuffer};
    use crate::image_pipeline::color::{
        gray_negative, gray_to_pseudo_color, hsv_segmentation, rgb_channel_to_gray,
        rgb_negative, rgb_pixel_to_hsv, rgb_to_gray, rgb_to_hsv, HsvRange, RgbChannel,
    };
    use crate::image_pipeline::common::error::VisionError;

    fn rgb_row(pixels: &[[u8; 3]]) -> PixelBuffer {
        let data = pixels.iter().flatten().copied().collect();
        PixelBuffer::from_raw(pixels.len(), 1, Channels::Rgb, 255, data).unwrap()
    }

    #[test]
    fn test_gray_pixel_has_zero_saturation() {
        assert_eq!(rgb_pixel_to_hsv(100, 100, 100), [0, 0, 100]);
        assert_eq!(rgb_pixel_to_hsv(0, 0, 0), [0, 0, 0]);
    }

    #[test]
    fn test_primary_colors_hue_bytes() {
        assert_eq!(rgb_pixel_to_hsv(255, 0, 0), [0, 255, 255]);
        assert_eq!(rgb_pixel_to_hsv(0, 255, 0), [85, 255, 255]);
        assert_eq!(rgb_pixel_to_hsv(0, 0, 255), [170, 255, 255]);
    }

    #[test]
    fn test_red_sector_wraps_below_zero() {
        // max == r and g < b: hue lands near the top of the circle
        let [h, s, v] = rgb_pixel_to_hsv(255, 0, 10);
        assert!(h > 250, "hue byte {h}");
        assert_eq!(s, 255);
        assert_eq!(v, 255);
    }

    #[test]
    fn test_rgb_to_hsv_buffer() {
        let src = rgb_row(&[[255, 0, 0], [128, 128, 128]]);
        let mut dst = PixelBuffer::new(2, 1, Channels::Rgb, 255).unwrap();

        rgb_to_hsv(&src, &mut dst).unwrap();

        assert_eq!(dst.pixel(0, 0), &[0, 255, 255]);
        assert_eq!(dst.pixel(1, 0), &[0, 0, 128]);
    }

    #[test]
    fn test_rgb_to_hsv_rejects_wrong_layouts() {
        let src = rgb_row(&[[1, 2, 3]]);
        let mut gray = PixelBuffer::new(1, 1, Channels::Gray, 255).unwrap();
        assert!(matches!(
            rgb_to_hsv(&src, &mut gray),
            Err(VisionError::InvalidChannelConfiguration { actual: 1, .. })
        ));

        let mut wide = PixelBuffer::new(2, 1, Channels::Rgb, 255).unwrap();
        assert!(matches!(
            rgb_to_hsv(&src, &mut wide),
            Err(VisionError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_full_range_excludes_zero_hue() {
        let rgb = rgb_row(&[[255, 0, 0], [0, 255, 0], [90, 90, 90]]);
        let mut hsv = PixelBuffer::new(3, 1, Channels::Rgb, 255).unwrap();
        rgb_to_hsv(&rgb, &mut hsv).unwrap();

        let mut mask = PixelBuffer::new(3, 1, Channels::Rgb, 255).unwrap();
        hsv_segmentation(&hsv, &mut mask, &HsvRange::new(0, 360, 0, 100, 0, 100)).unwrap();

        // hue 0 sits on the exclusive lower bound
        assert_eq!(mask.pixel(0, 0), &[0, 0, 0]);
        assert_eq!(mask.pixel(1, 0), &[255, 255, 255]);
        assert_eq!(mask.pixel(2, 0), &[0, 0, 0]);
    }

    #[test]
    fn test_segmentation_saturation_and_value_are_inclusive() {
        let range = HsvRange::new(100, 140, 100, 100, 100, 100);
        assert!(range.contains(120, 100, 100));
        assert!(range.contains(140, 100, 100));
        assert!(!range.contains(100, 100, 100));
        assert!(!range.contains(120, 99, 100));
    }

    #[test]
    fn test_segmentation_requires_three_channels() {
        let gray = PixelBuffer::new(2, 2, Channels::Gray, 255).unwrap();
        let mut dst = PixelBuffer::new(2, 2, Channels::Rgb, 255).unwrap();
        let result = hsv_segmentation(&gray, &mut dst, &HsvRange::new(0, 360, 0, 100, 0, 100));
        assert!(matches!(result, Err(VisionError::InvalidChannelConfiguration { .. })));
    }

    #[test]
    fn test_rgb_to_gray_rounds() {
        let src = rgb_row(&[[255, 255, 255], [255, 0, 0], [0, 255, 0], [0, 0, 0]]);
        let mut dst = PixelBuffer::new(4, 1, Channels::Gray, 255).unwrap();

        rgb_to_gray(&src, &mut dst).unwrap();

        assert_eq!(dst.as_bytes(), &[255, 76, 150, 0]);
    }

    #[test]
    fn test_rgb_to_gray_requires_gray_destination() {
        let src = rgb_row(&[[1, 2, 3]]);
        let mut dst = PixelBuffer::new(1, 1, Channels::Rgb, 255).unwrap();
        assert!(rgb_to_gray(&src, &mut dst).is_err());
    }

    #[test]
    fn test_negatives() {
        let mut gray = PixelBuffer::from_raw(2, 1, Channels::Gray, 255, vec![0, 200]).unwrap();
        gray_negative(&mut gray).unwrap();
        assert_eq!(gray.as_bytes(), &[255, 55]);

        let mut rgb = rgb_row(&[[10, 20, 30]]);
        rgb_negative(&mut rgb).unwrap();
        assert_eq!(rgb.as_bytes(), &[245, 235, 225]);

        assert!(gray_negative(&mut rgb).is_err());
    }

    #[test]
    fn test_channel_to_gray() {
        let mut rgb = rgb_row(&[[10, 20, 30]]);
        rgb_channel_to_gray(&mut rgb, RgbChannel::Green).unwrap();
        assert_eq!(rgb.as_bytes(), &[20, 20, 20]);
    }

    #[test]
    fn test_pseudo_color_ramp() {
        let gray = PixelBuffer::from_raw(4, 1, Channels::Gray, 255, vec![0, 64, 128, 255]).unwrap();
        let mut rgb = PixelBuffer::new(4, 1, Channels::Rgb, 255).unwrap();

        gray_to_pseudo_color(&gray, &mut rgb).unwrap();

        assert_eq!(rgb.pixel(0, 0), &[0, 0, 255]);
        assert_eq!(rgb.pixel(1, 0), &[0, 255, 255]);
        assert_eq!(rgb.pixel(2, 0), &[0, 255, 0]);
        assert_eq!(rgb.pixel(3, 0), &[255, 3, 0]);
    }
}
