//! Generates typed bindings for the OpenGL API from the Khronos `gl.xml` registry. In order to use,
//! first parse a [`Registry`] from a registry document, and then call [`gen_bindings()`] with a
//! [`GenConfig`]. The result is Rust source which depends on the [`gll`] runtime crate: one trait per
//! OpenGL version, a shared `Extensions` trait, a constructor per version that loads commands
//! through a caller-supplied proc address lookup, and the registry's enums as constants.
//!
//! The `gll_generator` binary wraps all of this in one step.
//!
//! [`Registry`]: ./struct.Registry.html
//! [`GenConfig`]: ./struct.GenConfig.html
//! [`gen_bindings()`]: ./struct.Registry.html#method.gen_bindings
//! [`gll`]: https://docs.rs/gll/

mod error;

#[cfg(feature = "unstable_generator_api")]
pub mod registry;
#[cfg(feature = "unstable_generator_api")]
pub mod generator;

#[cfg(not(feature = "unstable_generator_api"))]
mod registry;
#[cfg(not(feature = "unstable_generator_api"))]
mod generator;

pub use error::{Error, Result};
pub use registry::{parse_type_def, Command, Enum, Extension, Feature, Param, Registry, Type, DEFAULT_API, KNOWN_TYPEDEFS};
pub use generator::{generate, GenConfig, GenRegistry};
