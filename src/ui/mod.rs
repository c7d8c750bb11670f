//! Article grid rendering layer with component-based architecture.
//!
//! This module turns article records into element trees: a two-column grid of
//! cards, styled through a [`Theme`] of class names.
//!
//! # Architecture
//!
//! ```text
//! &[Article] → GridViewModel::from_articles → GridViewModel → render → Elements
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing the renderable grid
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Element builders for rows, cards and card parts
//! - [`helpers`]: Date and section text formatting
//! - [`theme`]: Class-name schemes, built-in and TOML-loaded

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel};
pub use theme::{Theme, ThemeClasses};
pub use viewmodel::{CardViewModel, GridViewModel, ImageInfo, RowViewModel};
