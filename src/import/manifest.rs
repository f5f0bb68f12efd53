//! Dataset metadata documents and naming conventions.
//!
//! A capture directory holds one `heightmap_metadata.json` for the whole
//! map plus, per tile, a `tex_<col>_<row>.json` listing which texture each
//! chunk blends.

use serde::{Deserialize, Serialize};

use crate::core::{Error, GridCoord, Result};
use crate::layer::{LayerMetadata, LayerRegistry, Pixel};
use crate::tile::{Tile, TileBuilder};

/// Centimeters per yard
const CM_PER_YARD: f64 = 91.44;

/// Height span of a landscape at 100% vertical scale, in centimeters
const LANDSCAPE_Z_SPAN_CM: f64 = 51200.0;

/// Relative prefix texture references carry in tile manifests
const TEXTURE_PATH_PREFIX: &str = "..\\..\\";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeightRange {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    /// Height span in yards
    pub range: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexCount {
    pub x: u32,
    pub y: u32,
}

/// Map-wide heightmap metadata
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeightmapMetadata {
    pub height_range: HeightRange,
    pub total_vertices: VertexCount,
}

impl HeightmapMetadata {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Vertical landscape scale, in percent, that maps the full u16 range
    /// onto the captured height span.
    pub fn z_scale_percent(&self) -> f64 {
        self.height_range.range * CM_PER_YARD / LANDSCAPE_Z_SPAN_CM * 100.0
    }
}

/// One texture reference in a tile manifest
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerReference {
    /// Texture path relative to the capture directory
    pub file: String,
    #[serde(rename = "chunkIndex")]
    pub chunk_index: usize,
}

/// Per-tile list of chunk layers, in blend order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileLayerManifest {
    #[serde(default)]
    pub layers: Vec<LayerReference>,
}

impl TileLayerManifest {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Register every referenced texture as a layer and append it to its chunk.
    ///
    /// References are applied in document order, which fixes each layer's
    /// decode position within its chunk.
    pub fn apply(&self, builder: &mut TileBuilder, registry: &LayerRegistry) -> Result<()> {
        for reference in &self.layers {
            let name = layer_name_from_texture_path(&reference.file);
            let handle = registry.get_or_create(&name, || {
                let path = clean_texture_path(&reference.file);
                let directory = path.rsplit_once('/').map(|(dir, _)| dir.to_string()).unwrap_or_default();
                LayerMetadata::new(path).with_asset_directory(directory)
            });
            builder.add_chunk_layer(reference.chunk_index, handle)?;
        }
        Ok(())
    }

    /// Build a tile from decoded rasters and this manifest
    pub fn build_tile(
        &self,
        heights: Vec<u16>,
        weights: Vec<Pixel>,
        registry: &LayerRegistry,
    ) -> Result<Tile> {
        let mut builder = Tile::builder().with_heights(heights).with_weights(weights);
        self.apply(&mut builder, registry)?;
        Ok(builder.build())
    }
}

/// Normalize a manifest texture reference to a forward-slash relative path
pub fn clean_texture_path(path: &str) -> String {
    path.replace(TEXTURE_PATH_PREFIX, "").replace('\\', "/")
}

/// Stable layer name for a texture: its file name without extension
pub fn layer_name_from_texture_path(path: &str) -> String {
    base_filename(&clean_texture_path(path)).to_string()
}

fn base_filename(path: &str) -> &str {
    let file = path.rsplit('/').next().unwrap_or(path);
    match file.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file,
    }
}

/// Parse a tile file name such as `tex_32_45` into its position.
///
/// The first number is the column and the second the row.
pub fn parse_tile_name(name: &str) -> Result<GridCoord> {
    let stem = base_filename(name);
    let parts: Vec<&str> = stem.split('_').filter(|part| !part.is_empty()).collect();
    let invalid = || Error::InvalidTileName(name.to_string());

    let [_, col, row, ..] = parts.as_slice() else {
        return Err(invalid());
    };
    let col = col.parse::<usize>().map_err(|_| invalid())?;
    let row = row.parse::<usize>().map_err(|_| invalid())?;
    Ok(GridCoord::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heightmap_metadata() {
        let json = r#"{
            "height_range": { "min": -120.5, "max": 439.5, "range": 560.0 },
            "total_vertices": { "x": 1025, "y": 769 }
        }"#;
        let metadata = HeightmapMetadata::from_json_str(json).unwrap();
        assert_eq!(metadata.total_vertices, VertexCount { x: 1025, y: 769 });
        assert_eq!(metadata.height_range.min, Some(-120.5));

        let expected = 560.0 * 91.44 / 51200.0 * 100.0;
        assert!((metadata.z_scale_percent() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_heightmap_metadata_without_bounds() {
        let json = r#"{"height_range": {"range": 10.0}, "total_vertices": {"x": 2, "y": 2}}"#;
        let metadata = HeightmapMetadata::from_json_str(json).unwrap();
        assert_eq!(metadata.height_range.max, None);
    }

    #[test]
    fn test_texture_names() {
        let path = "..\\..\\tileset\\elwynn\\grass_01.png";
        assert_eq!(clean_texture_path(path), "tileset/elwynn/grass_01.png");
        assert_eq!(layer_name_from_texture_path(path), "grass_01");
        assert_eq!(layer_name_from_texture_path("rock"), "rock");
        assert_eq!(layer_name_from_texture_path("a.b/dirt.blp"), "dirt");
    }

    #[test]
    fn test_parse_tile_name() {
        assert_eq!(parse_tile_name("tex_32_45").unwrap(), GridCoord::new(45, 32));
        assert_eq!(parse_tile_name("tex_32_45.png").unwrap(), GridCoord::new(45, 32));
        assert_eq!(parse_tile_name("tex__7_8").unwrap(), GridCoord::new(8, 7));
    }

    #[test]
    fn test_parse_tile_name_invalid() {
        assert!(matches!(parse_tile_name("tex_32"), Err(Error::InvalidTileName(_))));
        assert!(matches!(parse_tile_name("tex_a_b"), Err(Error::InvalidTileName(_))));
    }

    #[test]
    fn test_apply_manifest() {
        let json = r#"{"layers": [
            {"file": "..\\..\\tileset\\grass.png", "chunkIndex": 0},
            {"file": "..\\..\\tileset\\rock.png", "chunkIndex": 0},
            {"file": "..\\..\\tileset\\grass.png", "chunkIndex": 5}
        ]}"#;
        let manifest = TileLayerManifest::from_json_str(json).unwrap();
        let registry = LayerRegistry::new();

        let tile = manifest.build_tile(vec![0; 9], Vec::new(), &registry).unwrap();

        assert_eq!(registry.len(), 2);
        let grass = registry.find("grass").unwrap();
        let rock = registry.find("rock").unwrap();
        assert_eq!(tile.chunks().layers(0), &[grass, rock]);
        assert_eq!(tile.chunks().layers(5), &[grass]);

        let entry = registry.get(grass).unwrap();
        assert_eq!(entry.metadata.texture_path, "tileset/grass.png");
        assert_eq!(entry.metadata.asset_directory, "tileset");
    }

    #[test]
    fn test_apply_manifest_bad_chunk() {
        let manifest = TileLayerManifest {
            layers: vec![LayerReference { file: "grass.png".into(), chunk_index: 300 }],
        };
        let registry = LayerRegistry::new();
        let mut builder = Tile::builder();
        assert!(matches!(manifest.apply(&mut builder, &registry), Err(Error::ChunkIndex(300))));
    }
}
