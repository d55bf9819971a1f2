//! listholder: a list-holding adapter for recycling row views.
//!
//! The crate provides [`ListAdapter`](adapter::ListAdapter), which keeps its
//! own copy of a list of items, tells the view when that list changes, and
//! paints rows through a pluggable [`RowRenderer`](adapter::RowRenderer)
//! while reusing row slots handed back by the view.
//!
//! # Example
//!
//! ```
//! use listholder::prelude::*;
//!
//! #[derive(Debug, Default)]
//! struct Cell {
//!     text: String,
//!     highlighted: bool,
//! }
//!
//! struct CellRenderer;
//!
//! impl RowRenderer<String> for CellRenderer {
//!     type View = Cell;
//!
//!     fn attach(&mut self, _view: &mut Cell) {}
//!
//!     fn fill(&mut self, view: &mut Cell, item: &String, is_selected: bool) {
//!         view.text.clone_from(item);
//!         view.highlighted = is_selected;
//!     }
//! }
//!
//! let adapter = ListAdapter::new(AdapterConfig::new(LayoutId::new(1)), || CellRenderer).unwrap();
//! adapter.set_list(&["A".to_string(), "B".to_string(), "C".to_string()]);
//! adapter.set_selected_item("B".to_string());
//!
//! let mut inflate = |_layout: LayoutId| Cell::default();
//! let slot = adapter.render_row(1, None, &mut inflate).unwrap();
//! assert!(slot.view().highlighted);
//!
//! // Scrolling: hand the slot back to paint another row without inflating.
//! let slot = adapter.render_row(2, Some(slot), &mut inflate).unwrap();
//! assert_eq!(slot.view().text, "C");
//! assert!(!slot.view().highlighted);
//! ```

pub mod adapter;
pub mod config;
pub mod error;
pub mod prelude;

pub use error::{AdapterError, AdapterResult};
pub use listholder_core::{ConnectionId, Signal};
