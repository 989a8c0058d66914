//! Playlist output: M3U emission for the catalog and the standalone
//! group-title re-tagger.

pub mod emitter;
pub mod retag;
