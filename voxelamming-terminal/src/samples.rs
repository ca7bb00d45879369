/// Sample scenes shipped with the CLI
use voxelamming_core::geometry::BoxDescriptor;
use voxelamming_core::heightmap::{box_color, HeightMap};
use voxelamming_core::{Color, SceneError, SceneStore, Turtle};

/// Command asking the renderer for its lightweight mode
pub const LITE_RENDER: &str = "liteRender";

/// Four colored columns with every other box knocked out of the middle two
pub fn stripes(scene: &mut SceneStore) {
    scene.set_box_size(0.5);
    scene.set_build_interval(0.01);

    for i in 0..100 {
        let y = i as f64;
        scene.create_box(-1.0, y, 0.0, Color::rgb(0.0, 1.0, 1.0));
        scene.create_box(0.0, y, 0.0, Color::rgb(1.0, 0.0, 0.0));
        scene.create_box(1.0, y, 0.0, Color::rgb(1.0, 1.0, 0.0));
        scene.create_box(2.0, y, 0.0, Color::rgb(0.0, 1.0, 1.0));
    }

    for i in 0..50 {
        let i = i as f64;
        scene.remove_box(0.0, i * 2.0, 0.0);
        scene.remove_box(1.0, i * 2.0 + 1.0, 0.0);
    }
}

const CAGE_COLORS: [Color; 15] = [
    Color::rgb(0.0, 0.0, 0.0),
    Color::rgb(1.0, 0.0, 0.0),
    Color::rgb(0.0, 1.0, 0.0),
    Color::rgb(0.0, 0.0, 1.0),
    Color::rgb(1.0, 1.0, 0.0),
    Color::rgb(0.0, 1.0, 1.0),
    Color::rgb(1.0, 0.0, 1.0),
    Color::rgb(1.0, 1.0, 1.0),
    Color::rgb(0.5, 0.0, 0.0),
    Color::rgb(0.0, 0.5, 0.0),
    Color::rgb(0.0, 0.0, 0.5),
    Color::rgb(0.5, 0.5, 0.0),
    Color::rgb(0.0, 0.5, 0.5),
    Color::rgb(0.5, 0.0, 0.5),
    Color::rgb(0.5, 0.5, 0.5),
];

/// Fifteen turtle loops fanned around the vertical axis
pub fn turtle_cage(scene: &mut SceneStore) {
    scene.set_box_size(0.3);
    scene.set_build_interval(0.01);
    scene.set_command(LITE_RENDER);

    let mut turtle = Turtle::new();
    let count = CAGE_COLORS.len() as f64;
    for (j, color) in CAGE_COLORS.iter().enumerate() {
        turtle.reset();
        turtle.set_color(*color);
        turtle.left(j as f64 * 180.0 / count);

        for _ in 0..60 {
            turtle.forward(scene, 4.0);
            turtle.up(6.0);
        }
    }
}

/// Options for laying out a height map
#[derive(Debug, Clone, Copy)]
pub struct TerrainOptions {
    /// Sample every `skip`-th cell in both directions
    pub skip: usize,
    pub high: Color,
    pub low: Color,
}

impl Default for TerrainOptions {
    fn default() -> Self {
        Self {
            skip: 2,
            high: Color::rgb(0.5, 0.0, 0.0),
            low: Color::rgb(0.0, 1.0, 0.0),
        }
    }
}

/// Terrain centered on the origin, colored by elevation.
///
/// Returns the number of columns placed.
pub fn terrain(scene: &mut SceneStore, map: &HeightMap, options: TerrainOptions) -> usize {
    scene.set_box_size(0.5);
    scene.set_build_interval(0.001);
    scene.set_command(LITE_RENDER);

    let skip = options.skip.max(1);
    let half_columns = (map.columns / (skip * 2)) as f64;
    let half_rows = (map.rows / (skip * 2)) as f64;

    let mut placed = 0;
    for j in 0..map.rows.div_ceil(skip) {
        for i in 0..map.columns.div_ceil(skip) {
            let Some(height) = map.height(j * skip, i * skip) else {
                continue;
            };
            if height < 0 {
                continue;
            }
            let color = box_color(height, map.max_height, options.high, options.low);
            scene.create_box(i as f64 - half_columns, height as f64, j as f64 - half_rows, color);
            placed += 1;
        }
    }
    placed
}

/// Boxes read from a voxel mesh
pub fn mesh_model(scene: &mut SceneStore, boxes: &[BoxDescriptor]) {
    scene.set_box_size(0.5);
    scene.set_build_interval(0.01);

    for descriptor in boxes {
        descriptor.place(scene);
    }
}

/// Four copies of a small arch, each placed in its own rotated frame
pub fn nested_arches(scene: &mut SceneStore) -> Result<(), SceneError> {
    scene.set_box_size(0.5);
    scene.set_build_interval(0.01);

    for k in 0..4 {
        let yaw = k as f64 * 90.0;
        scene.push_matrix();
        scene.translate(0.0, 0.0, 0.0, 0.0, yaw, 0.0);

        scene.push_matrix();
        scene.translate(6.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        arch(scene, Color::rgb(0.25 * k as f64, 0.5, 1.0 - 0.25 * k as f64));
        scene.pop_matrix()?;

        scene.pop_matrix()?;
    }
    Ok(())
}

fn arch(scene: &mut SceneStore, color: Color) {
    scene.draw_line([0.0, 0.0, -2.0], [0.0, 4.0, -2.0], color);
    scene.draw_line([0.0, 0.0, 2.0], [0.0, 4.0, 2.0], color);
    scene.draw_line([0.0, 5.0, -2.0], [0.0, 5.0, 2.0], color);
}
