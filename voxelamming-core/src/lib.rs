/// Voxelamming Core Library - scene building for a remote voxel renderer
///
/// Client code places boxes, lines, text, lights, models and sprites in
/// local frames nested through a matrix stack, then captures the whole scene
/// as a snapshot and hands it to a transport.

pub mod entity;
pub mod error;
pub mod geometry;
pub mod heightmap;
pub mod line;
pub mod ply;
pub mod quantize;
pub mod rotation;
pub mod scene;
pub mod snapshot;
pub mod sprite;
pub mod transform;
pub mod transport;
pub mod turtle;
pub mod wire;

// Re-export commonly used types
pub use entity::{Color, LightType};
pub use error::{IngestError, SceneError, TransportError};
pub use line::LineOutcome;
pub use quantize::Precision;
pub use scene::{Recording, SceneStore};
pub use snapshot::Snapshot;
pub use transform::{Rotation, Transform, TransformStack};
pub use transport::{send_snapshot, RecordingTransport, Transport};
pub use turtle::Turtle;
