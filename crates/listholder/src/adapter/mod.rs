//! List adapter and the contracts around it.
//!
//! The adapter sits between an application's list of items and a pull-based
//! list view that recycles its rows:
//!
//! ```text
//! ┌─────────────┐ set_list / add_item  ┌─────────────┐  data_set_changed  ┌─────────────┐
//! │    Host     │─────────────────────>│ ListAdapter │───────────────────>│    View     │
//! │ application │  set_selected_item   │             │<───────────────────│             │
//! └─────────────┘                      └─────────────┘  count / render_row└─────────────┘
//!                                             │
//!                                             │ attach / fill
//!                                             v
//!                                      ┌─────────────┐
//!                                      │ RowRenderer │ (lives inside a RowSlot)
//!                                      └─────────────┘
//! ```
//!
//! # Core Types
//!
//! - `ListAdapter`: owns the items and the selection, produces rows
//! - `RowRenderer`: paints one item into a row view
//! - `RowSlot`: a row view carrying its attached renderer, recycled by the view
//! - `SlotInflater`: host hook that builds a new row view for a layout
//! - `RowSource`: the query contract a list view consumes
//! - `AdapterSignals`: refresh notifications

mod list_adapter;
mod slot;
mod traits;

pub use list_adapter::{ListAdapter, ListAdapterBuilder, RendererFactory};
pub use slot::RowSlot;
pub use traits::{AdapterSignals, RowRenderer, RowSource, SlotInflater};
