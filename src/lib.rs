//! A toy **prompt to 3D model** service.
//!
//! A [`provider::MeshProvider`] turns a text prompt into an indexed
//! [`mesh::Mesh`] (currently always the 1" unit cube), the [`server`] keeps
//! generated meshes in a [`store::ModelStore`], and [`io::stl`] re-encodes a
//! stored mesh as STL when it is downloaded.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): binary `.stl` export through `stl_io`
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod client;
pub mod config;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod mesh;
pub mod provider;
pub mod server;
pub mod store;
pub mod triangulated;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use mesh::Mesh;
pub use provider::{BoxProvider, MeshProvider};
