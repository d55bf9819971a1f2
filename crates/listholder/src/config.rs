//! Adapter configuration.
//!
//! An [`AdapterConfig`] names the layouts rows are inflated from. It can be
//! built in code or loaded from TOML:
//!
//! ```
//! use listholder::config::{AdapterConfig, LayoutId};
//!
//! let config = AdapterConfig::from_toml_str(
//!     r#"
//!     item_layout = 17
//!     drop_down_layout = 18
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.item_layout, LayoutId::new(17));
//! assert_eq!(config.drop_down_layout(), LayoutId::new(18));
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AdapterError, AdapterResult};

/// Identifier of the layout a row view is inflated from.
///
/// The host's [`SlotInflater`](crate::adapter::SlotInflater) maps this to
/// whatever it uses to build a row (a template, a resource, a widget tree).
/// Zero is reserved as "no layout".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutId(u32);

impl LayoutId {
    /// The reserved, never-valid layout.
    pub const NONE: LayoutId = LayoutId(0);

    /// Creates a layout id.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns `true` unless this is [`LayoutId::NONE`].
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl Default for LayoutId {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Layout configuration for a [`ListAdapter`](crate::adapter::ListAdapter).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Layout used for normal list rows.
    pub item_layout: LayoutId,
    /// Layout used for drop-down rows. Falls back to `item_layout`.
    pub drop_down_layout: Option<LayoutId>,
}

impl AdapterConfig {
    /// Creates a config that uses `item_layout` for every row kind.
    pub fn new(item_layout: LayoutId) -> Self {
        Self {
            item_layout,
            drop_down_layout: None,
        }
    }

    /// Sets a dedicated drop-down layout.
    pub fn with_drop_down_layout(mut self, layout: LayoutId) -> Self {
        self.drop_down_layout = Some(layout);
        self
    }

    /// Layout drop-down rows are inflated from.
    pub fn drop_down_layout(&self) -> LayoutId {
        self.drop_down_layout.unwrap_or(self.item_layout)
    }

    /// Checks that every configured layout is usable.
    pub fn validate(&self) -> AdapterResult<()> {
        if !self.item_layout.is_valid() {
            return Err(AdapterError::InvalidLayout(self.item_layout));
        }
        match self.drop_down_layout {
            Some(layout) if !layout.is_valid() => Err(AdapterError::InvalidLayout(layout)),
            _ => Ok(()),
        }
    }

    /// Parses and validates a config from TOML text.
    pub fn from_toml_str(s: &str) -> AdapterResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> AdapterResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }
}
