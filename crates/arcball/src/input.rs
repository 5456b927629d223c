//! Translation of winit input into camera and trackball calls.

use arcball_camera::Camera;
use glam::Vec2;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

/// Wheel angle delta of one scroll notch, in eighths of a degree.
pub const ANGLE_DELTA_PER_LINE: f32 = 120.0;

/// Routes window events to a [`Camera`].
///
/// Only the left button drives the trackball. Cursor motion is always
/// forwarded; the trackball ignores it unless a drag is open.
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    cursor: Vec2,
    left_mouse_down: bool,
}

impl InputHandler {
    /// Creates a handler with the cursor at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last known cursor position in pixels.
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Returns whether the left button is held.
    #[must_use]
    pub fn is_left_mouse_down(&self) -> bool {
        self.left_mouse_down
    }

    /// Returns true if the event was consumed by the camera.
    pub fn handle_window_event(&mut self, camera: &mut Camera, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::MouseInput { state, button, .. } => {
                self.on_mouse_input(camera, *button, *state)
            }
            WindowEvent::CursorMoved { position, .. } => self.on_cursor_moved(camera, *position),
            WindowEvent::Resized(size) => self.on_resized(camera, *size),
            WindowEvent::MouseWheel { delta, .. } => self.on_mouse_wheel(camera, *delta),
            _ => false,
        }
    }

    /// Starts or ends a drag on left button press or release.
    pub fn on_mouse_input(
        &mut self,
        camera: &mut Camera,
        button: MouseButton,
        state: ElementState,
    ) -> bool {
        match (button, state) {
            (MouseButton::Left, ElementState::Pressed) => {
                self.left_mouse_down = true;
                camera.start_drag(self.cursor);
                true
            }
            (MouseButton::Left, ElementState::Released) => {
                self.left_mouse_down = false;
                camera.end_drag();
                true
            }
            _ => false,
        }
    }

    /// Records the cursor and continues any open drag.
    ///
    /// Returns true only when a drag consumed the motion.
    #[allow(clippy::cast_possible_truncation)]
    pub fn on_cursor_moved(&mut self, camera: &mut Camera, position: PhysicalPosition<f64>) -> bool {
        self.cursor = Vec2::new(position.x as f32, position.y as f32);
        camera.drag(self.cursor);
        camera.trackball.is_dragging()
    }

    /// Propagates a new surface size.
    pub fn on_resized(&mut self, camera: &mut Camera, size: PhysicalSize<u32>) -> bool {
        camera.resize(size.width, size.height);
        true
    }

    /// Zooms the field of view.
    #[allow(clippy::cast_possible_truncation)]
    pub fn on_mouse_wheel(&mut self, camera: &mut Camera, delta: MouseScrollDelta) -> bool {
        let angle_delta = match delta {
            MouseScrollDelta::LineDelta(_, y) => y * ANGLE_DELTA_PER_LINE,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
        };
        camera.zoom_fov(angle_delta);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat4;
    use winit::event::{DeviceId, TouchPhase};

    fn press(handler: &mut InputHandler, camera: &mut Camera, button: MouseButton) -> bool {
        handler.on_mouse_input(camera, button, ElementState::Pressed)
    }

    fn release(handler: &mut InputHandler, camera: &mut Camera, button: MouseButton) -> bool {
        handler.on_mouse_input(camera, button, ElementState::Released)
    }

    fn move_to(handler: &mut InputHandler, camera: &mut Camera, x: f64, y: f64) -> bool {
        handler.on_cursor_moved(camera, PhysicalPosition::new(x, y))
    }

    #[allow(unsafe_code)]
    fn device_id() -> DeviceId {
        // SAFETY: the dummy id is only compared, never passed to the platform.
        unsafe { DeviceId::dummy() }
    }

    #[test]
    fn test_left_drag_rotates() {
        let mut camera = Camera::new(800, 600);
        let mut handler = InputHandler::new();

        move_to(&mut handler, &mut camera, 400.0, 300.0);
        assert!(press(&mut handler, &mut camera, MouseButton::Left));
        assert!(camera.trackball.is_dragging());
        assert!(move_to(&mut handler, &mut camera, 500.0, 250.0));
        assert!(release(&mut handler, &mut camera, MouseButton::Left));

        assert!(!camera.trackball.is_dragging());
        assert_ne!(camera.trackball.rotation(), Mat4::IDENTITY);
    }

    #[test]
    fn test_other_buttons_ignored() {
        let mut camera = Camera::new(800, 600);
        let mut handler = InputHandler::new();

        move_to(&mut handler, &mut camera, 400.0, 300.0);
        assert!(!press(&mut handler, &mut camera, MouseButton::Right));
        move_to(&mut handler, &mut camera, 700.0, 100.0);
        assert!(!release(&mut handler, &mut camera, MouseButton::Right));

        assert!(!handler.is_left_mouse_down());
        assert_eq!(camera.trackball.rotation(), Mat4::IDENTITY);
    }

    #[test]
    fn test_hover_does_not_rotate() {
        let mut camera = Camera::new(800, 600);
        let mut handler = InputHandler::new();
        assert!(!move_to(&mut handler, &mut camera, 100.0, 100.0));
        assert!(!move_to(&mut handler, &mut camera, 700.0, 500.0));
        assert_eq!(handler.cursor(), Vec2::new(700.0, 500.0));
        assert_eq!(camera.trackball.rotation(), Mat4::IDENTITY);
    }

    #[test]
    fn test_resize_forwards_to_trackball() {
        let mut camera = Camera::new(800, 600);
        let mut handler = InputHandler::new();
        handler.on_resized(&mut camera, PhysicalSize::new(1200, 900));
        assert_eq!(camera.trackball.window_size(), glam::UVec2::new(1200, 900));
    }

    #[test]
    fn test_wheel_zooms_fov() {
        let mut camera = Camera::new(800, 600);
        let mut handler = InputHandler::new();

        handler.on_mouse_wheel(&mut camera, MouseScrollDelta::LineDelta(0.0, 1.0));
        assert!((camera.fov_y_degrees - 37.5).abs() < 1e-5);

        handler.on_mouse_wheel(
            &mut camera,
            MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -120.0)),
        );
        assert!((camera.fov_y_degrees - 30.0).abs() < 1e-5);
    }

    #[test]
    fn test_window_event_dispatch() {
        let mut camera = Camera::new(800, 600);
        let mut handler = InputHandler::new();
        let device_id = device_id();

        let resized = WindowEvent::Resized(PhysicalSize::new(1024, 768));
        assert!(handler.handle_window_event(&mut camera, &resized));
        assert_eq!(camera.trackball.window_size(), glam::UVec2::new(1024, 768));

        let hover = WindowEvent::CursorMoved {
            device_id,
            position: PhysicalPosition::new(512.0, 384.0),
        };
        assert!(!handler.handle_window_event(&mut camera, &hover));

        let press = WindowEvent::MouseInput {
            device_id,
            state: ElementState::Pressed,
            button: MouseButton::Left,
        };
        assert!(handler.handle_window_event(&mut camera, &press));
        assert!(camera.trackball.is_dragging());

        let motion = WindowEvent::CursorMoved {
            device_id,
            position: PhysicalPosition::new(700.0, 300.0),
        };
        assert!(handler.handle_window_event(&mut camera, &motion));

        let release = WindowEvent::MouseInput {
            device_id,
            state: ElementState::Released,
            button: MouseButton::Left,
        };
        assert!(handler.handle_window_event(&mut camera, &release));
        assert!(!camera.trackball.is_dragging());
        assert_ne!(camera.trackball.rotation(), Mat4::IDENTITY);

        let wheel = WindowEvent::MouseWheel {
            device_id,
            delta: MouseScrollDelta::LineDelta(0.0, 1.0),
            phase: TouchPhase::Moved,
        };
        assert!(handler.handle_window_event(&mut camera, &wheel));
        assert!((camera.fov_y_degrees - 37.5).abs() < 1e-5);

        assert!(!handler.handle_window_event(&mut camera, &WindowEvent::Focused(true)));
        assert!(!handler.handle_window_event(&mut camera, &WindowEvent::RedrawRequested));
    }
}
