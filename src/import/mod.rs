//! Import-side metadata and configuration.
//!
//! Everything here works on in-memory strings; reading files and decoding
//! images is left to the caller.

pub mod config;
pub mod manifest;

pub use config::ImportConfig;
pub use manifest::{
    clean_texture_path, layer_name_from_texture_path, parse_tile_name, HeightmapMetadata,
    LayerReference, TileLayerManifest,
};
