//! Frame driver
//!
//! The host owns the surface and the frame callback. It hands each timestamp
//! to [`Viewer::frame`] and each size change to [`Viewer::resize`]; the
//! viewer poses the bird and calls into a [`Renderer`] synchronously.

use tracing::debug;

use crate::animation::{AnimationState, Animator, Pose};
use crate::error::BuildError;
use crate::params::{IdleParams, SceneParams};
use crate::scene::{compose, Stage, Viewport};

/// Rendering backend boundary
pub trait Renderer {
    /// Handle a drawable surface size change
    fn resize(&mut self, viewport: Viewport);

    /// Draw one frame of the stage from its camera
    fn render(&mut self, stage: &Stage);
}

/// A composed stage with its animator and clock
#[derive(Debug, Clone)]
pub struct Viewer {
    stage: Stage,
    animator: Animator,
    state: AnimationState,
    viewport: Viewport,
}

impl Viewer {
    /// Compose `params` and size the camera for `viewport`
    pub fn new(params: &SceneParams, viewport: Viewport) -> Result<Self, BuildError> {
        let stage = compose(params)?;
        Self::from_stage(stage, params.bird.idle.clone(), viewport)
    }

    pub fn from_stage(
        mut stage: Stage,
        idle: IdleParams,
        viewport: Viewport,
    ) -> Result<Self, BuildError> {
        let animator = Animator::new(idle, &stage)?;
        stage.camera.resize(viewport);
        Ok(Self {
            stage,
            animator,
            state: AnimationState::default(),
            viewport,
        })
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Seconds of animation shown so far
    pub fn elapsed(&self) -> f32 {
        self.state.elapsed
    }

    /// Surface size in device pixels, with the pixel ratio capped
    pub fn drawable_size(&self) -> (u32, u32) {
        self.viewport.drawable_size(self.stage.max_pixel_ratio)
    }

    /// Pose the bird for host time `now_ms` and render it
    pub fn frame(&mut self, now_ms: f64, renderer: &mut impl Renderer) -> Pose {
        let t = self.state.advance_to(now_ms);
        let pose = self.animator.animate(t, &mut self.stage);
        renderer.render(&self.stage);
        pose
    }

    /// Follow a surface size change. Only the camera and renderer change.
    pub fn resize(&mut self, viewport: Viewport, renderer: &mut impl Renderer) {
        self.viewport = viewport;
        self.stage.camera.resize(viewport);
        renderer.resize(viewport);
        debug!(
            width = viewport.width,
            height = viewport.height,
            aspect = self.stage.camera.aspect,
            "resized viewport"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Preset;

    /// Records what the viewer asked for
    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<f32>,
        sizes: Vec<Viewport>,
    }

    impl Renderer for RecordingRenderer {
        fn resize(&mut self, viewport: Viewport) {
            self.sizes.push(viewport);
        }

        fn render(&mut self, stage: &Stage) {
            let y = stage.bird().map(|b| b.transform().position.y).unwrap_or_default();
            self.frames.push(y);
        }
    }

    #[test]
    fn test_frame_renders_posed_stage() {
        let mut viewer = Viewer::new(&Preset::Sculpture.params(), Viewport::new(800, 600)).unwrap();
        let mut renderer = RecordingRenderer::default();

        let pose = viewer.frame(0.0, &mut renderer);
        assert_eq!(pose.root_y, 0.22);
        let pose = viewer.frame(1500.0, &mut renderer);
        assert_eq!(pose.time, 1.5);
        assert_eq!(renderer.frames, vec![0.22, pose.root_y]);
    }

    #[test]
    fn test_resize_updates_camera_only() {
        let mut viewer = Viewer::new(&Preset::V7.params(), Viewport::new(800, 600)).unwrap();
        let mut renderer = RecordingRenderer::default();
        viewer.frame(2000.0, &mut renderer);

        let before = viewer.stage().root.clone();
        let viewport = Viewport::new(1600, 900);
        viewer.resize(viewport, &mut renderer);

        assert_eq!(viewer.stage().camera.aspect, 1600.0 / 900.0);
        assert_eq!(renderer.sizes, vec![viewport]);
        for name in before.names() {
            assert_eq!(
                before.find(name).unwrap().transform(),
                viewer.stage().find(name).unwrap().transform(),
                "{name}"
            );
        }
    }

    #[test]
    fn test_backwards_timestamp_holds_pose() {
        let mut viewer = Viewer::new(&Preset::V5.params(), Viewport::new(640, 480)).unwrap();
        let mut renderer = RecordingRenderer::default();
        let ahead = viewer.frame(4000.0, &mut renderer);
        let behind = viewer.frame(3000.0, &mut renderer);
        assert_eq!(ahead, behind);
        assert_eq!(viewer.elapsed(), 4.0);
    }

    #[test]
    fn test_drawable_size_caps_ratio() {
        let viewer = Viewer::new(
            &Preset::V6.params(),
            Viewport::new(400, 300).with_pixel_ratio(3.0),
        )
        .unwrap();
        assert_eq!(viewer.drawable_size(), (800, 600));
    }
}
