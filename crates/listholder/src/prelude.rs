//! Commonly used types, for glob import.

pub use crate::adapter::{
    AdapterSignals, ListAdapter, ListAdapterBuilder, RowRenderer, RowSlot, RowSource,
    SlotInflater,
};
pub use crate::config::{AdapterConfig, LayoutId};
pub use crate::error::{AdapterError, AdapterResult};
