/// Drawable size in physical pixels, polled once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// Viewport of the given size; zero dimensions are raised to 1.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Compare against the cached size and adopt the new one. Returns
    /// whether the size changed. Zero sizes (minimized windows) are ignored
    /// so the aspect ratio stays finite.
    pub fn poll_resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            log::warn!("ignoring zero-sized viewport {width}x{height}");
            return false;
        }
        if (width, height) == (self.width, self.height) {
            return false;
        }
        log::debug!(
            "viewport resized {}x{} -> {width}x{height}",
            self.width,
            self.height
        );
        self.width = width;
        self.height = height;
        true
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width over height.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_reports_changes_only() {
        let mut viewport = Viewport::new(800, 600);
        assert!(!viewport.poll_resize(800, 600));
        assert!(viewport.poll_resize(1920, 1080));
        assert!((viewport.aspect() - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn zero_sizes_are_ignored() {
        let mut viewport = Viewport::new(800, 600);
        assert!(!viewport.poll_resize(0, 600));
        assert!(!viewport.poll_resize(800, 0));
        assert_eq!((viewport.width(), viewport.height()), (800, 600));
        assert!(Viewport::new(0, 0).aspect().is_finite());
    }
}
