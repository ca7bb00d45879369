/// Height-map CSV reader and elevation coloring
use std::path::Path;

use nom::{
    bytes::complete::take_till,
    character::complete::char,
    combinator::{all_consuming, opt},
    multi::separated_list1,
    number::complete::double,
    sequence::terminated,
    IResult,
};

use crate::entity::Color;
use crate::error::IngestError;

/// Marker for cells without data
pub const NO_DATA: i64 = -1;

/// Grid of integer heights, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct HeightMap {
    pub rows: usize,
    pub columns: usize,
    pub cells: Vec<Vec<i64>>,
    pub max_height: i64,
}

impl HeightMap {
    /// Height at a cell, `None` when out of range or without data
    pub fn height(&self, row: usize, column: usize) -> Option<i64> {
        self.cells
            .get(row)
            .and_then(|r| r.get(column))
            .copied()
            .filter(|h| *h != NO_DATA)
    }
}

/// Read a height map from disk
pub fn load_height_map<P: AsRef<Path>>(
    path: P,
    height_scale: f64,
    columns: usize,
    rows: usize,
) -> Result<HeightMap, IngestError> {
    let text = std::fs::read_to_string(path)?;
    parse_height_map(&text, height_scale, columns, rows)
}

/// Parse a height map whose first line holds every height, comma separated.
///
/// A literal `0` (or an empty field) means no data; any other value becomes
/// `floor(value * height_scale)`. Heights fill `rows` rows of `columns`
/// cells; cells past the end of the data are left without data.
pub fn parse_height_map(
    input: &str,
    height_scale: f64,
    columns: usize,
    rows: usize,
) -> Result<HeightMap, IngestError> {
    let first_line = input.lines().next().unwrap_or_default();
    if first_line.trim().is_empty() {
        return Err(IngestError::EmptyInput);
    }

    let (_, fields) = split_fields(first_line).map_err(|e| IngestError::Parse {
        line: 1,
        message: e.to_string(),
    })?;

    let heights = fields
        .iter()
        .enumerate()
        .map(|(i, field)| parse_height(field.trim(), height_scale, i))
        .collect::<Result<Vec<i64>, IngestError>>()?;

    let max_height = heights.iter().copied().max().unwrap_or(NO_DATA);

    let cells = (0..rows)
        .map(|row| {
            (0..columns)
                .map(|column| {
                    heights
                        .get(column + columns * row)
                        .copied()
                        .unwrap_or(NO_DATA)
                })
                .collect()
        })
        .collect();

    Ok(HeightMap {
        rows,
        columns,
        cells,
        max_height,
    })
}

fn parse_height(field: &str, height_scale: f64, index: usize) -> Result<i64, IngestError> {
    if field.is_empty() || field == "0" {
        return Ok(NO_DATA);
    }
    let (_, value) = all_consuming(double::<&str, nom::error::Error<&str>>)(field).map_err(|_| {
        IngestError::Parse {
            line: 1,
            message: format!("field {} is not a number: {:?}", index + 1, field),
        }
    })?;
    Ok((value * height_scale).floor() as i64)
}

fn split_fields(input: &str) -> IResult<&str, Vec<&str>> {
    let input = input.trim_end_matches('\r');
    all_consuming(terminated(
        separated_list1(char(','), take_till(|c| c == ',')),
        opt(char(',')),
    ))(input)
}

/// Blend between two colors by relative height.
///
/// A map with no positive height maps everything to `low`.
pub fn box_color(height: i64, max_height: i64, high: Color, low: Color) -> Color {
    if max_height <= 0 {
        return low;
    }
    let t = height as f64 / max_height as f64;
    let mix = |h: f64, l: f64| (h - l) * t + l;
    Color::rgb(mix(high.r, low.r), mix(high.g, low.g), mix(high.b, low.b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_grid() {
        let map = parse_height_map("0,1.5,2.25,0,3,0.1\nignored,line\n", 10.0, 3, 2).unwrap();
        assert_eq!(map.cells, vec![vec![-1, 15, 22], vec![-1, 30, 1]]);
        assert_eq!(map.max_height, 30);
        assert_eq!(map.height(0, 0), None);
        assert_eq!(map.height(1, 1), Some(30));
        assert_eq!(map.height(5, 0), None);
    }

    #[test]
    fn test_short_data_fills_with_no_data() {
        let map = parse_height_map("1,2", 1.0, 2, 2).unwrap();
        assert_eq!(map.cells, vec![vec![1, 2], vec![-1, -1]]);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            parse_height_map("", 1.0, 2, 2),
            Err(IngestError::EmptyInput)
        ));
    }

    #[test]
    fn test_bad_field_reports_parse_error() {
        let err = parse_height_map("1,abc,3", 1.0, 3, 1).unwrap_err();
        assert!(matches!(err, IngestError::Parse { line: 1, .. }));
        assert!(err.to_string().contains("field 2"));
    }

    #[test]
    fn test_box_color_interpolates() {
        let high = Color::rgb(0.5, 0.0, 0.0);
        let low = Color::rgb(0.0, 1.0, 0.0);
        assert_eq!(box_color(0, 10, high, low), low);
        assert_eq!(box_color(10, 10, high, low), high);
        let mid = box_color(5, 10, high, low);
        assert!((mid.r - 0.25).abs() < 1e-12);
        assert!((mid.g - 0.5).abs() < 1e-12);
        assert_eq!(box_color(3, 0, high, low), low);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0,4,8,0").unwrap();
        let map = load_height_map(file.path(), 0.5, 2, 2).unwrap();
        assert_eq!(map.max_height, 4);
        assert_eq!(map.height(0, 1), Some(2));
    }
}
