//! Tile-map loading
//!
//! Levels are RON (Rusty Object Notation) files describing a tile grid with
//! named layers of positioned tiles. Both brotli-compressed and plain RON
//! files are supported; the format is auto-detected by checking for a valid
//! RON start byte.
//!
//! World coordinates are y-up: row 0 is the bottom row of the map, and a
//! tile at (col, row) occupies the square starting at
//! (col * tile_size, row * tile_size).

use std::fs;
use std::io::Cursor;
use std::path::Path;

use macroquad::prelude::Rect;
use serde::{Deserialize, Serialize};

/// Validation limits to prevent resource exhaustion from malicious files
pub mod limits {
    /// Maximum grid dimension (width or height) for a map
    pub const MAX_MAP_SIZE: u32 = 1024;
    /// Maximum number of layers in a map
    pub const MAX_LAYERS: usize = 16;
    /// Maximum tiles in a single layer
    pub const MAX_TILES_PER_LAYER: usize = 65_536;
    /// Maximum string length for layer names
    pub const MAX_NAME_LEN: usize = 64;
    /// Tile edge length bounds in pixels
    pub const MIN_TILE_SIZE: f32 = 1.0;
    pub const MAX_TILE_SIZE: f32 = 4096.0;
}

/// Layer names the game looks up in a loaded map
pub mod layers {
    pub const PLATFORM: &str = "Platform";
    pub const COINS: &str = "Coins";
    pub const FOREGROUND: &str = "Foreground";
    pub const BACKGROUND: &str = "Background";
    pub const DONT_TOUCH: &str = "Don't Touch";
    pub const ENEMIES: &str = "Enemies";
}

/// Error type for map loading
#[derive(Debug)]
pub enum MapError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for MapError {
    fn from(e: std::io::Error) -> Self {
        MapError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for MapError {
    fn from(e: ron::error::SpannedError) -> Self {
        MapError::ParseError(e)
    }
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::IoError(e) => write!(f, "IO error: {}", e),
            MapError::ParseError(e) => write!(f, "Parse error: {}", e),
            MapError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

/// One tile placed on the map grid
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TilePlacement {
    pub col: u32,
    pub row: u32,
    /// Optional horizontal patrol bounds in world pixels.
    /// Only meaningful on the Enemies layer.
    #[serde(default)]
    pub patrol: Option<(f32, f32)>,
}

/// A named layer of positioned tiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapLayer {
    pub name: String,
    pub tiles: Vec<TilePlacement>,
}

/// A complete level map: a tile grid with named layers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileMap {
    /// Grid width in tiles
    pub width: u32,
    /// Grid height in tiles
    pub height: u32,
    /// Tile edge length in pixels
    pub tile_size: f32,
    /// Optional sky color override as RGB in 0.0..=1.0
    #[serde(default)]
    pub background_color: Option<[f32; 3]>,
    pub layers: Vec<MapLayer>,
}

impl TileMap {
    /// Right edge of the map in world pixels
    pub fn end_of_map(&self) -> f32 {
        self.width as f32 * self.tile_size
    }

    /// Look up a layer by name
    pub fn layer(&self, name: &str) -> Option<&MapLayer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// World-space rectangle covered by a placed tile
    pub fn tile_rect(&self, tile: &TilePlacement) -> Rect {
        Rect::new(
            tile.col as f32 * self.tile_size,
            tile.row as f32 * self.tile_size,
            self.tile_size,
            self.tile_size,
        )
    }

    /// World-space rects for every tile in the named layer.
    /// Missing layers yield an empty list.
    pub fn layer_rects(&self, name: &str) -> Vec<Rect> {
        self.layer(name)
            .map(|l| l.tiles.iter().map(|t| self.tile_rect(t)).collect())
            .unwrap_or_default()
    }
}

/// Check if a float is valid for map geometry (finite, sane magnitude)
fn is_valid_float(f: f32) -> bool {
    f.is_finite() && f.abs() <= limits::MAX_TILE_SIZE * limits::MAX_MAP_SIZE as f32
}

fn validate_layer(layer: &MapLayer, map: &TileMap, idx: usize) -> Result<(), String> {
    let context = format!("layer[{}] \"{}\"", idx, layer.name);

    if layer.name.is_empty() || layer.name.len() > limits::MAX_NAME_LEN {
        return Err(format!("{}: bad name length {}", context, layer.name.len()));
    }
    if layer.tiles.len() > limits::MAX_TILES_PER_LAYER {
        return Err(format!(
            "{}: too many tiles ({} > {})",
            context,
            layer.tiles.len(),
            limits::MAX_TILES_PER_LAYER
        ));
    }

    for (i, tile) in layer.tiles.iter().enumerate() {
        if tile.col >= map.width || tile.row >= map.height {
            return Err(format!(
                "{} tile[{}]: ({}, {}) outside {}x{} grid",
                context, i, tile.col, tile.row, map.width, map.height
            ));
        }
        if let Some((min, max)) = tile.patrol {
            if !is_valid_float(min) || !is_valid_float(max) || min > max {
                return Err(format!(
                    "{} tile[{}]: invalid patrol bounds ({}, {})",
                    context, i, min, max
                ));
            }
        }
    }

    Ok(())
}

/// Validate a loaded map before the game touches it
pub fn validate_map(map: &TileMap) -> Result<(), MapError> {
    if map.width == 0 || map.width > limits::MAX_MAP_SIZE {
        return Err(MapError::ValidationError(format!(
            "bad map width {} (max {})",
            map.width,
            limits::MAX_MAP_SIZE
        )));
    }
    if map.height == 0 || map.height > limits::MAX_MAP_SIZE {
        return Err(MapError::ValidationError(format!(
            "bad map height {} (max {})",
            map.height,
            limits::MAX_MAP_SIZE
        )));
    }
    if !map.tile_size.is_finite()
        || map.tile_size < limits::MIN_TILE_SIZE
        || map.tile_size > limits::MAX_TILE_SIZE
    {
        return Err(MapError::ValidationError(format!(
            "bad tile size {}",
            map.tile_size
        )));
    }
    if map.layers.len() > limits::MAX_LAYERS {
        return Err(MapError::ValidationError(format!(
            "too many layers ({} > {})",
            map.layers.len(),
            limits::MAX_LAYERS
        )));
    }
    if let Some([r, g, b]) = map.background_color {
        for c in [r, g, b] {
            if !(0.0..=1.0).contains(&c) {
                return Err(MapError::ValidationError(format!(
                    "background color component {} outside 0..=1",
                    c
                )));
            }
        }
    }

    for (i, layer) in map.layers.iter().enumerate() {
        validate_layer(layer, map, i).map_err(MapError::ValidationError)?;
        // Duplicate names would make lookups ambiguous
        if map.layers[..i].iter().any(|l| l.name == layer.name) {
            return Err(MapError::ValidationError(format!(
                "duplicate layer name \"{}\"",
                layer.name
            )));
        }
    }

    Ok(())
}

/// Load a map from a RON file (supports both compressed and uncompressed)
pub fn load_map<P: AsRef<Path>>(path: P) -> Result<TileMap, MapError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;

    // Detect format: RON files start with '(' or whitespace, brotli is binary
    let is_plain_ron = bytes
        .first()
        .map(|&b| b == b'(' || b == b' ' || b == b'\n' || b == b'\r' || b == b'\t')
        .unwrap_or(false);

    let contents = if is_plain_ron {
        String::from_utf8(bytes).map_err(|e| {
            MapError::IoError(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("invalid UTF-8: {}", e),
            ))
        })?
    } else {
        // Brotli compressed - decompress first
        let mut decompressed = Vec::new();
        brotli::BrotliDecompress(&mut Cursor::new(&bytes), &mut decompressed).map_err(|e| {
            MapError::IoError(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("brotli decompression failed: {}", e),
            ))
        })?;
        String::from_utf8(decompressed).map_err(|e| {
            MapError::IoError(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("invalid UTF-8 after decompression: {}", e),
            ))
        })?
    };

    let map: TileMap = match ron::from_str(&contents) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("RON parse error in {}: {}", path.display(), e);
            return Err(e.into());
        }
    };

    validate_map(&map)?;

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_map() -> TileMap {
        TileMap {
            width: 8,
            height: 6,
            tile_size: 100.0,
            background_color: None,
            layers: vec![
                MapLayer {
                    name: layers::PLATFORM.to_string(),
                    tiles: (0..8)
                        .map(|col| TilePlacement {
                            col,
                            row: 0,
                            patrol: None,
                        })
                        .collect(),
                },
                MapLayer {
                    name: layers::COINS.to_string(),
                    tiles: vec![TilePlacement {
                        col: 3,
                        row: 1,
                        patrol: None,
                    }],
                },
            ],
        }
    }

    fn write_temp(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_plain_ron() {
        let ron_text = ron::ser::to_string_pretty(&sample_map(), Default::default()).unwrap();
        let file = write_temp(ron_text.as_bytes());

        let map = load_map(file.path()).unwrap();
        assert_eq!(map.width, 8);
        assert_eq!(map.tile_size, 100.0);
        assert_eq!(map.end_of_map(), 800.0);
        assert_eq!(map.layer(layers::PLATFORM).unwrap().tiles.len(), 8);
    }

    #[test]
    fn test_load_brotli_compressed() {
        let ron_text = ron::ser::to_string_pretty(&sample_map(), Default::default()).unwrap();
        let mut compressed = Vec::new();
        brotli::BrotliCompress(
            &mut std::io::Cursor::new(ron_text.as_bytes()),
            &mut compressed,
            &brotli::enc::BrotliEncoderParams::default(),
        )
        .unwrap();
        let file = write_temp(&compressed);

        let map = load_map(file.path()).unwrap();
        assert_eq!(map.width, 8);
        assert_eq!(map.layer(layers::COINS).unwrap().tiles.len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_map("no/such/map.ron").unwrap_err();
        assert!(matches!(err, MapError::IoError(_)));
    }

    #[test]
    fn test_malformed_ron_is_parse_error() {
        let file = write_temp(b"(width: \"oops\")");
        let err = load_map(file.path()).unwrap_err();
        assert!(matches!(err, MapError::ParseError(_)));
    }

    #[test]
    fn test_rejects_tile_outside_grid() {
        let mut map = sample_map();
        map.layers[0].tiles.push(TilePlacement {
            col: 8,
            row: 0,
            patrol: None,
        });
        assert!(matches!(
            validate_map(&map),
            Err(MapError::ValidationError(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_layer_names() {
        let mut map = sample_map();
        map.layers.push(MapLayer {
            name: layers::PLATFORM.to_string(),
            tiles: vec![],
        });
        assert!(matches!(
            validate_map(&map),
            Err(MapError::ValidationError(_))
        ));
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let mut map = sample_map();
        map.width = 0;
        assert!(matches!(
            validate_map(&map),
            Err(MapError::ValidationError(_))
        ));
    }

    #[test]
    fn test_rejects_inverted_patrol_bounds() {
        let mut map = sample_map();
        map.layers[0].tiles[0].patrol = Some((500.0, 100.0));
        assert!(matches!(
            validate_map(&map),
            Err(MapError::ValidationError(_))
        ));
    }

    #[test]
    fn test_tile_rect_geometry() {
        let map = sample_map();
        let rect = map.tile_rect(&TilePlacement {
            col: 2,
            row: 3,
            patrol: None,
        });
        assert_eq!(rect.x, 200.0);
        assert_eq!(rect.y, 300.0);
        assert_eq!(rect.w, 100.0);
        assert_eq!(rect.h, 100.0);
    }

    #[test]
    fn test_layer_rects_missing_layer_is_empty() {
        let map = sample_map();
        assert!(map.layer_rects("Nope").is_empty());
    }
}
