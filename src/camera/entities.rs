use bevy::prelude::*;

/// Lower zoom bound.
pub const MIN_ZOOM: f32 = 0.5;
/// Upper zoom bound.
pub const MAX_ZOOM: f32 = 2.0;

/// Marker for the single 2D camera rendering the map.
#[derive(Component, Reflect)]
pub struct MapCamera;

/// World-space camera: the point shown at the viewport centre, and a zoom factor.
///
/// Rendering translates to the viewport centre, scales by `zoom`, then
/// translates by `-(x, y)`. [`Self::screen_to_world`] is the exact inverse.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct CameraState {
    /// World x at the viewport centre.
    pub x: f32,
    /// World y at the viewport centre (y-down).
    pub y: f32,
    /// Scale factor, always within `[MIN_ZOOM, MAX_ZOOM]`.
    zoom: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: 1.0,
        }
    }
}

impl CameraState {
    /// Camera at `(x, y)` with `zoom` clamped into range.
    #[cfg_attr(not(test), expect(dead_code, reason = "the app starts from Default"))]
    pub fn new(x: f32, y: f32, zoom: f32) -> Self {
        Self {
            x,
            y,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Moves the camera against a screen-space drag so the map follows the pointer.
    ///
    /// The delta is divided by `zoom`, keeping pan speed zoom-invariant.
    pub fn pan(&mut self, screen_delta: Vec2) {
        self.x -= screen_delta.x / self.zoom;
        self.y -= screen_delta.y / self.zoom;
    }

    /// Adds `delta` to the zoom factor, clamped to `[MIN_ZOOM, MAX_ZOOM]`.
    pub fn zoom_by(&mut self, delta: f32) {
        self.zoom = (self.zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Maps a viewport pixel (origin top-left) into world space.
    pub fn screen_to_world(&self, screen: Vec2, viewport: Vec2) -> Vec2 {
        (screen - viewport / 2.0) / self.zoom + self.position()
    }

    /// Forward render transform: world point to viewport pixel.
    pub fn world_to_screen(&self, world: Vec2, viewport: Vec2) -> Vec2 {
        (world - self.position()) * self.zoom + viewport / 2.0
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

    #[test]
    fn default_camera_is_centred_at_unit_zoom() {
        let cam = CameraState::default();
        assert_eq!(cam.position(), Vec2::ZERO);
        assert_eq!(cam.zoom(), 1.0);
    }

    #[test]
    fn pan_moves_against_drag() {
        let mut cam = CameraState::default();
        cam.pan(Vec2::new(10.0, -20.0));
        assert_eq!(cam.position(), Vec2::new(-10.0, 20.0));
    }

    #[test]
    fn pan_is_scaled_by_zoom() {
        let mut cam = CameraState::new(0.0, 0.0, 2.0);
        cam.pan(Vec2::new(10.0, 10.0));
        assert_eq!(cam.position(), Vec2::new(-5.0, -5.0));
    }

    #[test]
    fn zoom_by_clamps_large_positive() {
        let mut cam = CameraState::default();
        cam.zoom_by(1000.0);
        assert_eq!(cam.zoom(), MAX_ZOOM);
    }

    #[test]
    fn zoom_by_clamps_large_negative() {
        let mut cam = CameraState::default();
        cam.zoom_by(-1000.0);
        assert_eq!(cam.zoom(), MIN_ZOOM);
    }

    #[test]
    fn zoom_by_stays_in_range_for_any_sequence() {
        let mut cam = CameraState::default();
        for i in -200..200 {
            cam.zoom_by(i as f32 * 0.013);
            assert!((MIN_ZOOM..=MAX_ZOOM).contains(&cam.zoom()));
        }
    }

    #[test]
    fn new_clamps_zoom() {
        assert_eq!(CameraState::new(0.0, 0.0, 9.0).zoom(), MAX_ZOOM);
        assert_eq!(CameraState::new(0.0, 0.0, 0.0).zoom(), MIN_ZOOM);
    }

    #[test]
    fn viewport_centre_maps_to_camera_position() {
        let cam = CameraState::new(42.0, -7.0, 1.7);
        let world = cam.screen_to_world(VIEWPORT / 2.0, VIEWPORT);
        assert!((world - cam.position()).length() < 1e-4);
    }

    #[test]
    fn screen_to_world_matches_formula() {
        let cam = CameraState::new(10.0, 20.0, 2.0);
        let world = cam.screen_to_world(Vec2::new(740.0, 260.0), VIEWPORT);
        assert!((world - Vec2::new(60.0, -30.0)).length() < 1e-4);
    }

    #[test]
    fn screen_round_trip_for_many_cameras() {
        let points = [
            Vec2::ZERO,
            Vec2::new(86.6, 0.0),
            Vec2::new(-310.0, 455.5),
            Vec2::new(1e4, -2e3),
        ];
        for &zoom in &[0.5, 0.77, 1.0, 1.5, 2.0] {
            for &(x, y) in &[(0.0, 0.0), (-120.0, 35.0), (999.0, -444.0)] {
                let cam = CameraState::new(x, y, zoom);
                for &p in &points {
                    let screen = cam.world_to_screen(p, VIEWPORT);
                    let back = cam.screen_to_world(screen, VIEWPORT);
                    assert!(
                        (back - p).length() < 1e-2,
                        "round trip of {p} at {cam:?} gave {back}"
                    );
                }
            }
        }
    }
}
