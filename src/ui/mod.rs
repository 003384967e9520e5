//! UI layer.
//!
//! # Structure
//!
//! - [`markup`]: node tree and HTML serialisation
//! - [`components`]: the community components
//! - [`catalog`]: demo constructor for every component
//! - [`page`]: HTML page shell for the showcase

pub mod catalog;
pub mod components;
pub mod markup;
pub mod page;
