//! Terrain layers: per-pixel blend weight decoding and the layer registry.

pub mod decoder;
pub mod registry;

pub use decoder::{ChunkLayout, Pixel, CHUNKS_PER_SIDE, CHUNK_COUNT, MAX_CHUNK_LAYERS};
pub use registry::{LayerEntry, LayerHandle, LayerMetadata, LayerRegistry};
