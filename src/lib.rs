#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `pixanim` plays frame-table sprite animations: timed frames, named sections
//! (clips) over them, and a cursor that advances with wall-clock time in
//! forward, reverse or ping-pong order.
//!
pub use pixanim_internal::*;

#[cfg(all(feature = "dynamic_linking", not(target_family = "wasm")))]
#[allow(unused_imports)]
use pixanim_dylib;
