/// ASCII PLY reader for voxel meshes exported as colored quads
use std::collections::HashSet;
use std::path::Path;

use nom::{
    character::complete::char,
    combinator::eof,
    multi::count,
    number::complete::double,
    sequence::preceded,
    IResult,
};

use crate::error::IngestError;
use crate::geometry::{BoxDescriptor, ColoredVertex, Quad};

/// Read boxes from a PLY file on disk
pub fn load_ply<P: AsRef<Path>>(path: P) -> Result<Vec<BoxDescriptor>, IngestError> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_ply(&text))
}

/// Turn PLY text into deduplicated box descriptors.
///
/// Only lines made of exactly six space-separated numbers (`x y z r g b`)
/// are vertices; headers and face index lines are skipped. Every four
/// vertices form one quad.
pub fn parse_ply(input: &str) -> Vec<BoxDescriptor> {
    let vertices: Vec<ColoredVertex> = input
        .trim()
        .lines()
        .filter_map(|line| parse_vertex_line(line.trim_end_matches('\r')).ok())
        .map(|(_, [x, y, z, r, g, b])| ColoredVertex::new(x, y, z, r, g, b))
        .collect();

    if vertices.is_empty() {
        log::warn!("parse_ply: no vertex lines found");
    }

    let mut seen = HashSet::new();
    let mut boxes = Vec::new();
    for chunk in vertices.chunks_exact(4) {
        let quad = Quad::new(chunk[0], chunk[1], chunk[2], chunk[3]);
        let Some(descriptor) = quad.to_box() else {
            log::warn!("parse_ply: skipping zero-size face at {:?}", chunk[0].position);
            continue;
        };
        if seen.insert(descriptor_key(&descriptor)) {
            boxes.push(descriptor);
        }
    }
    boxes
}

/// Bit-exact identity of a descriptor, for deduplication
fn descriptor_key(descriptor: &BoxDescriptor) -> [u64; 6] {
    let [x, y, z] = descriptor.position;
    let c = descriptor.color;
    [x, y, z, c.r, c.g, c.b].map(f64::to_bits)
}

fn parse_vertex_line(input: &str) -> IResult<&str, [f64; 6]> {
    let (input, first) = double(input)?;
    let (input, rest) = count(preceded(char(' '), double), 5)(input)?;
    let (input, _) = eof(input)?;
    Ok((input, [first, rest[0], rest[1], rest[2], rest[3], rest[4]]))
}
