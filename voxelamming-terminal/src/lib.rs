/// Terminal front end: sample scenes, a colored snapshot summary and the
/// WebSocket transport used to reach the renderer.

pub mod report;
pub mod samples;
pub mod websocket;

pub use report::SnapshotReport;
pub use websocket::{WebSocketTransport, DEFAULT_SERVER};
