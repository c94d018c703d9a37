use thiserror::Error;

/// Errors produced when wrapping an externally supplied mask buffer.
#[derive(Debug, Error)]
pub enum MaskError {
    #[error("invalid mask buffer length (expected {expected} bytes, got {got})")]
    BufferLength { expected: usize, got: usize },

    #[error("invalid mask dimensions (width={width}, height={height})")]
    BadDimensions { width: usize, height: usize },
}

/// Borrowed view over a binary color-membership mask.
///
/// Row-major, one byte per pixel, nonzero meaning the pixel matched the
/// color band. The view does not own the buffer; it only checks that the
/// stated dimensions and the buffer length agree.
#[derive(Clone, Copy, Debug)]
pub struct MaskView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8],
}

impl<'a> MaskView<'a> {
    pub fn new(width: usize, height: usize, data: &'a [u8]) -> Result<Self, MaskError> {
        let expected = width
            .checked_mul(height)
            .filter(|&n| n > 0)
            .ok_or(MaskError::BadDimensions { width, height })?;
        if data.len() != expected {
            return Err(MaskError::BufferLength {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Membership test; coordinates outside the mask read as false.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        self.data[y as usize * self.width + x as usize] != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_matching_buffer() {
        let data = vec![0u8; 12];
        let mask = MaskView::new(4, 3, &data).expect("valid mask");
        assert_eq!(mask.width, 4);
        assert_eq!(mask.height, 3);
    }

    #[test]
    fn rejects_length_mismatch() {
        let data = vec![0u8; 11];
        match MaskView::new(4, 3, &data) {
            Err(MaskError::BufferLength { expected, got }) => {
                assert_eq!(expected, 12);
                assert_eq!(got, 11);
            }
            other => panic!("expected BufferLength error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert!(matches!(
            MaskView::new(0, 3, &[]),
            Err(MaskError::BadDimensions { .. })
        ));
    }

    #[test]
    fn out_of_bounds_reads_false() {
        let data = vec![255u8; 4];
        let mask = MaskView::new(2, 2, &data).expect("valid mask");
        assert!(mask.get(1, 1));
        assert!(!mask.get(-1, 0));
        assert!(!mask.get(0, 2));
    }
}
