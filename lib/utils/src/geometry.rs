use serde::{Deserialize, Serialize};

/// Snapshot of the viewport and document measurements taken for a single bottom check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollGeometry {
    pub viewport_height: f64,
    pub document_height: f64,
    pub scroll_offset: f64,
}

impl ScrollGeometry {
    pub fn new(viewport_height: f64, document_height: f64, scroll_offset: f64) -> Self {
        Self {
            viewport_height,
            document_height,
            scroll_offset,
        }
    }

    /// Vertical position of the viewport's lower edge, in document coordinates.
    pub fn window_bottom(&self) -> f64 {
        self.viewport_height + self.scroll_offset
    }

    /// Whether the viewport's lower edge has reached the document's, allowing `threshold` pixels of slack.
    pub fn is_bottom_reached(&self, threshold: f64) -> bool {
        self.window_bottom() + sanitize_threshold(threshold) >= self.document_height
    }
}

/// Maximum of several height measurements, engines disagree on which one holds the real document height.
pub fn max_height<I: IntoIterator<Item = f64>>(heights: I) -> f64 {
    heights.into_iter().fold(0.0, f64::max)
}

pub fn sanitize_threshold(threshold: f64) -> f64 {
    match threshold.is_finite() && threshold > 0.0 {
        true => threshold,
        false => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::{max_height, sanitize_threshold, ScrollGeometry};

    #[test]
    fn test_window_bottom() {
        assert_eq!(ScrollGeometry::new(800.0, 1000.0, 200.0).window_bottom(), 1000.0);
        assert_eq!(ScrollGeometry::new(800.0, 1000.0, 0.0).window_bottom(), 800.0);
        assert_eq!(ScrollGeometry::default().window_bottom(), 0.0);
    }

    #[test]
    fn test_is_bottom_reached() {
        assert!(ScrollGeometry::new(800.0, 1000.0, 200.0).is_bottom_reached(0.0));
        assert!(!ScrollGeometry::new(800.0, 1000.0, 100.0).is_bottom_reached(0.0));
        assert!(ScrollGeometry::new(800.0, 1000.0, 250.0).is_bottom_reached(0.0));
        // content shorter than the viewport
        assert!(ScrollGeometry::new(800.0, 500.0, 0.0).is_bottom_reached(0.0));
        assert!(!ScrollGeometry::new(800.0, 1000.0, 199.5).is_bottom_reached(0.0));
    }

    #[test]
    fn test_is_bottom_reached_matches_window_bottom() {
        for viewport_height in [0.0, 300.0, 800.0] {
            for document_height in [0.0, 500.0, 1000.0, 2400.0] {
                for scroll_offset in [0.0, 100.0, 200.0, 1600.0] {
                    let geometry = ScrollGeometry::new(viewport_height, document_height, scroll_offset);
                    assert_eq!(
                        geometry.is_bottom_reached(0.0),
                        viewport_height + scroll_offset >= document_height,
                        "{geometry:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_is_bottom_reached_with_threshold() {
        let geometry = ScrollGeometry::new(800.0, 1000.0, 100.0);
        assert!(!geometry.is_bottom_reached(50.0));
        assert!(geometry.is_bottom_reached(100.0));
        assert!(geometry.is_bottom_reached(150.0));
        assert!(!geometry.is_bottom_reached(-500.0));
        assert!(!geometry.is_bottom_reached(f64::NAN));
        assert!(!geometry.is_bottom_reached(f64::INFINITY));
    }

    #[test]
    fn test_max_height() {
        assert_eq!(max_height([640.0, 1200.0, 800.0, 1199.0, 0.0]), 1200.0);
        assert_eq!(max_height(Vec::new()), 0.0);
    }

    #[test]
    fn test_sanitize_threshold() {
        assert_eq!(sanitize_threshold(12.5), 12.5);
        assert_eq!(sanitize_threshold(0.0), 0.0);
        assert_eq!(sanitize_threshold(-1.0), 0.0);
        assert_eq!(sanitize_threshold(f64::NEG_INFINITY), 0.0);
    }
}
