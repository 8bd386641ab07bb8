//! Rendering data
//!
//! Builds colored triangle lists in canvas pixels. Uploading and drawing
//! them is left to whatever backend the host uses.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{Frame, build_frame};
pub use vertex::Vertex;
