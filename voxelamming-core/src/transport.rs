/// Delivery of snapshots to a remote renderer
use crate::error::TransportError;
use crate::snapshot::Snapshot;

/// A channel that delivers a serialized snapshot to a room.
///
/// Implementations own connection handling, timeouts and failures; the
/// scene never retries.
pub trait Transport {
    fn send(&mut self, room: &str, payload: &str) -> Result<(), TransportError>;
}

/// Serialize a snapshot and hand it to the transport
pub fn send_snapshot<T: Transport + ?Sized>(
    transport: &mut T,
    room: &str,
    snapshot: &Snapshot,
) -> Result<(), TransportError> {
    let payload = serde_json::to_string(snapshot)?;
    log::info!(
        "sending {} boxes, {} frames to room {}",
        snapshot.boxes.len(),
        snapshot.frames.len(),
        room
    );
    transport.send(room, &payload)
}

/// Keeps every payload in memory
#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub sent: Vec<(String, String)>,
}

impl Transport for RecordingTransport {
    fn send(&mut self, room: &str, payload: &str) -> Result<(), TransportError> {
        self.sent.push((room.to_string(), payload.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Color;
    use crate::scene::SceneStore;

    struct FailingTransport;

    impl Transport for FailingTransport {
        fn send(&mut self, _room: &str, _payload: &str) -> Result<(), TransportError> {
            Err(TransportError::Connect("refused".to_string()))
        }
    }

    #[test]
    fn test_payload_is_snapshot_json() {
        let mut scene = SceneStore::new();
        scene.create_box(1.0, 2.0, 3.0, Color::WHITE);
        let mut transport = RecordingTransport::default();

        send_snapshot(&mut transport, "1000", &scene.snapshot("main")).unwrap();

        let (room, payload) = &transport.sent[0];
        assert_eq!(room, "1000");
        let value: serde_json::Value = serde_json::from_str(payload).unwrap();
        assert_eq!(value["boxes"][0][1], 2);
        assert_eq!(value["name"], "main");
    }

    #[test]
    fn test_failure_is_reported_and_scene_kept() {
        let mut scene = SceneStore::new();
        scene.create_box(0.0, 0.0, 0.0, Color::WHITE);
        let result = send_snapshot(&mut FailingTransport, "1000", &scene.snapshot(""));
        assert!(matches!(result, Err(TransportError::Connect(_))));
        assert_eq!(scene.boxes().len(), 1);
    }
}
