/// Colored terminal summary of an outgoing snapshot
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use voxelamming_core::Snapshot;

/// Per-collection counts of a snapshot, ready to print
pub struct SnapshotReport {
    title: String,
    rows: Vec<(&'static str, usize)>,
    flags: Vec<(&'static str, String)>,
}

impl SnapshotReport {
    pub fn new(snapshot: &Snapshot) -> Self {
        let rows = vec![
            ("boxes", snapshot.boxes.len()),
            ("frames", snapshot.frames.len()),
            ("frame transforms", snapshot.frame_transforms.len()),
            ("sentences", snapshot.sentences.len()),
            ("lights", snapshot.lights.len()),
            ("commands", snapshot.commands.len()),
            ("models", snapshot.models.len()),
            ("model moves", snapshot.model_moves.len()),
            ("sprites", snapshot.sprites.len()),
            ("sprite moves", snapshot.sprite_moves.len()),
        ];
        let flags = vec![
            ("shape", snapshot.shape.clone()),
            ("float", (snapshot.is_allowed_float == 1).to_string()),
            ("metallic", (snapshot.is_metallic == 1).to_string()),
            ("commands", snapshot.commands.join(", ")),
            ("date", snapshot.date.clone()),
        ];
        let title = if snapshot.name.is_empty() {
            "snapshot".to_string()
        } else {
            format!("snapshot {:?}", snapshot.name)
        };
        Self { title, rows, flags }
    }

    /// Total number of entries across every collection
    pub fn total(&self) -> usize {
        self.rows.iter().map(|(_, n)| n).sum()
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.queue(SetForegroundColor(Color::Yellow))?;
        writer.queue(Print(format!("{}\n", self.title)))?;

        for (label, count) in &self.rows {
            // empty collections fade out
            let color = if *count == 0 { Color::DarkGrey } else { Color::Cyan };
            writer.queue(SetForegroundColor(color))?;
            writer.queue(Print(format!("  {label:<18}{count:>8}\n")))?;
        }
        writer.queue(SetForegroundColor(Color::White))?;
        writer.queue(Print(format!("  {:<18}{:>8}\n", "total", self.total())))?;
        for (label, value) in &self.flags {
            if value.is_empty() {
                continue;
            }
            writer.queue(SetForegroundColor(Color::Grey))?;
            writer.queue(Print(format!("  {label:<18}{value}\n")))?;
        }
        writer.queue(ResetColor)?;
        writer.flush()
    }
}

/// Print a one-line colored status message
pub fn status<W: Write>(writer: &mut W, ok: bool, message: &str) -> std::io::Result<()> {
    let color = if ok { Color::Green } else { Color::Red };
    writer.queue(SetForegroundColor(color))?;
    writer.queue(Print(format!("{message}\n")))?;
    writer.queue(ResetColor)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxelamming_core::{Color as BoxColor, SceneStore};

    #[test]
    fn test_report_counts() {
        let mut scene = SceneStore::new();
        scene.create_box(0.0, 0.0, 0.0, BoxColor::WHITE);
        scene.create_box(1.0, 0.0, 0.0, BoxColor::WHITE);
        scene.set_command("liteRender");
        let report = SnapshotReport::new(&scene.snapshot("demo"));
        assert_eq!(report.total(), 3);
    }

    #[test]
    fn test_draw_writes_labels() {
        let scene = SceneStore::new();
        let report = SnapshotReport::new(&scene.snapshot("demo"));
        let mut out = Vec::new();
        report.draw(&mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("snapshot \"demo\""));
        assert!(text.contains("boxes"));
        assert!(text.contains("sprite moves"));
        assert!(text.contains("total"));
    }
}
