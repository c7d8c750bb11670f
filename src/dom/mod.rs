//! Page binding layer.
//!
//! The renderer never touches a global document. It is handed a [`Page`] that can
//! locate anchor elements by id, and it builds [`Element`] trees that it appends
//! under those anchors.
//!
//! # Modules
//!
//! - [`element`]: Shared element handles, attributes, text and click dispatch
//! - [`page`]: The [`Page`] lookup trait and the in-memory [`Document`]
//! - [`html`]: Serialization of element trees to HTML

pub mod element;
pub mod html;
pub mod page;

pub use element::{Element, Listener};
pub use page::{Document, Page};
