//! Procedural scene composer for a low-poly nightingale
//!
//! A declarative parameter table describes the bird: colors, dimensions,
//! counts and offsets for every body part, plus its idle motion. One set of
//! shape builders turns any table into a named scene tree, and one animator
//! moves a fixed handful of its transforms as a pure function of time.
//! Rendering is left to whatever implements [`viewer::Renderer`].
//!
//! # Example
//! ```no_run
//! use nightingale::prelude::*;
//!
//! let params = Preset::V7.params();
//! let mut stage = compose(&params)?;
//!
//! // Pose the bird two seconds into its idle loop
//! let animator = Animator::new(params.bird.idle.clone(), &stage)?;
//! animator.animate(2.0, &mut stage);
//!
//! // Inspect it offline
//! nightingale::export::export_stage(&stage, "nightingale.obj".as_ref())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod animation;
pub mod color;
pub mod config;
pub mod error;
pub mod export;
pub mod mesh;
pub mod params;
pub mod scene;
pub mod shapes;
pub mod viewer;

pub use error::{BuildError, ConfigError, ExportError};

/// Common imports for composing and animating scenes
pub mod prelude {
    pub use crate::animation::{AnimationState, Animator, Pose};
    pub use crate::color::Rgb;
    pub use crate::params::{BirdParams, Preset, SceneParams, Side};
    pub use crate::scene::{compose, Camera, Node, Stage, Viewport};
    pub use crate::viewer::{Renderer, Viewer};
    pub use crate::{BuildError, ConfigError, ExportError};
}
