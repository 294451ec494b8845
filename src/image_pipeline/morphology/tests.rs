#[cfg(test)]
mod tests {
    use crate::image_pipeline::buffer::{Channels, PixelBuffer};
    use crate::image_pipeline::common::error::VisionError;
    use crate::image_pipeline::morphology::{
        binary_close, binary_close_iterated, binary_dilate, binary_erode, binary_erode_iterated,
        binary_open,
    };

    fn canvas(size: usize, foreground: &[(usize, usize)]) -> PixelBuffer {
        let mut image = PixelBuffer::new(size, size, Channels::Gray, 255).unwrap();
        for &(x, y) in foreground {
            image.set(x, y, 0, 255);
        }
        image
    }

    fn foreground(image: &PixelBuffer) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for y in 0..image.height() {
            for x in 0..image.width() {
                if image.get(x, y, 0) == 255 {
                    out.push((x, y));
                }
            }
        }
        out
    }

    fn square(x0: usize, y0: usize, side: usize) -> Vec<(usize, usize)> {
        (y0..y0 + side)
            .flat_map(|y| (x0..x0 + side).map(move |x| (x, y)))
            .collect()
    }

    #[test]
    fn test_open_removes_isolated_pixel() {
        let src = canvas(7, &[(3, 3)]);
        let mut dst = PixelBuffer::new(7, 7, Channels::Gray, 255).unwrap();

        binary_open(&src, &mut dst, 3).unwrap();

        assert!(foreground(&dst).is_empty());
    }

    #[test]
    fn test_close_restores_isolated_pixel() {
        let src = canvas(7, &[(3, 3)]);
        let mut dst = PixelBuffer::new(7, 7, Channels::Gray, 255).unwrap();

        binary_close(&src, &mut dst, 3).unwrap();

        assert_eq!(foreground(&dst), vec![(3, 3)]);
    }

    #[test]
    fn test_erode_shrinks_square() {
        let src = canvas(7, &square(1, 1, 5));
        let mut dst = PixelBuffer::new(7, 7, Channels::Gray, 255).unwrap();

        binary_erode(&src, &mut dst, 3).unwrap();

        assert_eq!(foreground(&dst), square(2, 2, 3));
    }

    #[test]
    fn test_erode_leaves_outer_band_untouched() {
        let src = PixelBuffer::from_raw(5, 5, Channels::Gray, 255, vec![255; 25]).unwrap();
        let mut dst = PixelBuffer::from_raw(5, 5, Channels::Gray, 255, vec![7; 25]).unwrap();

        binary_erode(&src, &mut dst, 3).unwrap();

        assert_eq!(dst.get(0, 0, 0), 7);
        assert_eq!(dst.get(4, 2, 0), 7);
        assert_eq!(dst.get(1, 1, 0), 255);
        assert_eq!(dst.get(3, 3, 0), 255);
    }

    #[test]
    fn test_dilate_skips_outside_neighbours() {
        let src = canvas(5, &[(0, 0)]);
        let mut dst = PixelBuffer::new(5, 5, Channels::Gray, 255).unwrap();

        binary_dilate(&src, &mut dst, 3).unwrap();

        assert_eq!(foreground(&dst), square(0, 0, 2));
    }

    #[test]
    fn test_even_kernel_uses_truncated_half() {
        let src = canvas(9, &[(4, 4)]);
        let mut dst = PixelBuffer::new(9, 9, Channels::Gray, 255).unwrap();

        binary_dilate(&src, &mut dst, 4).unwrap();

        assert_eq!(foreground(&dst), square(2, 2, 5));
    }

    #[test]
    fn test_zero_kernel_is_rejected() {
        let src = canvas(3, &[]);
        let mut dst = canvas(3, &[]);
        assert!(matches!(binary_erode(&src, &mut dst, 0), Err(VisionError::InvalidParameter(_))));
        assert!(matches!(binary_close(&src, &mut dst, 0), Err(VisionError::InvalidParameter(_))));
    }

    #[test]
    fn test_morphology_requires_single_channel() {
        let src = PixelBuffer::new(3, 3, Channels::Rgb, 255).unwrap();
        let mut dst = PixelBuffer::new(3, 3, Channels::Gray, 255).unwrap();
        assert!(matches!(
            binary_dilate(&src, &mut dst, 3),
            Err(VisionError::InvalidChannelConfiguration { .. })
        ));
    }

    #[test]
    fn test_iterated_close_and_erode() {
        let src = canvas(11, &[(5, 5)]);
        let mut closed = PixelBuffer::new(11, 11, Channels::Gray, 255).unwrap();
        binary_close_iterated(&src, &mut closed, 2).unwrap();
        assert_eq!(foreground(&closed), vec![(5, 5)]);

        let block = canvas(11, &square(2, 2, 7));
        let mut eroded = PixelBuffer::new(11, 11, Channels::Gray, 255).unwrap();
        binary_erode_iterated(&block, &mut eroded, 2).unwrap();
        assert_eq!(foreground(&eroded), square(4, 4, 3));
    }

    #[test]
    fn test_iterated_close_keeps_region_at_frame_edge() {
        let src = canvas(100, &square(2, 2, 58));
        let mut closed = PixelBuffer::new(100, 100, Channels::Gray, 255).unwrap();
        binary_close_iterated(&src, &mut closed, 25).unwrap();

        assert_eq!(closed.get(10, 10, 0), 255);
        assert_eq!(closed.get(30, 30, 0), 255);
        assert_eq!(closed.get(59, 59, 0), 255);
        assert_eq!(closed.get(60, 60, 0), 0);

        let mut eroded = PixelBuffer::new(100, 100, Channels::Gray, 255).unwrap();
        binary_erode_iterated(&closed, &mut eroded, 5).unwrap();
        assert_eq!(eroded.get(0, 0, 0), 255);
        assert_eq!(eroded.get(54, 54, 0), 255);
        assert_eq!(eroded.get(55, 55, 0), 0);
    }
}
