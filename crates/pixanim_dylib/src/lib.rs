//! Forces dynamic linking of `pixanim_internal` when the `dynamic_linking` feature is enabled.

#![allow(unused_imports, clippy::single_component_path_imports)]

use pixanim_internal;
