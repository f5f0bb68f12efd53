//! Import run configuration

use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::tile::DatasetGeometry;

/// Configuration for one import run.
///
/// Every field has a default, so a partial JSON document is enough.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Height samples per tile side (255 or 257 in known datasets)
    pub height_side: usize,
    /// Weight pixels per tile side
    pub weight_side: usize,
    /// Force the mid-tile chunk correction; derived from geometry when unset
    pub chunk_correction: Option<bool>,
    /// Tiles per proxy side
    pub tiles_per_proxy: usize,
    /// Quads per landscape component, used to crop proxies
    pub quads_per_component: usize,
    /// Distance between neighbouring height samples in centimeters
    pub horizontal_scale_cm: f64,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            height_side: 257,
            weight_side: 256,
            chunk_correction: None,
            tiles_per_proxy: 1,
            quads_per_component: 254,
            horizontal_scale_cm: 190.5,
        }
    }
}

impl ImportConfig {
    /// Parse from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validated dataset geometry for this configuration
    pub fn geometry(&self) -> Result<DatasetGeometry> {
        let geometry = DatasetGeometry::new(self.height_side, self.weight_side)?;
        Ok(match self.chunk_correction {
            Some(enabled) => geometry.with_chunk_correction(enabled),
            None => geometry,
        })
    }
}
