//! List-holding adapter.
//!
//! `ListAdapter<T, R>` owns the list a row view displays. The host mutates
//! it through `set_list`, `add_item`, `remove_item` and friends; every
//! mutation emits `data_set_changed`, after which the view re-queries the
//! count and re-renders its visible rows through `render_row`.

use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;

use listholder_core::{holder_debug, holder_render_trace, holder_trace, holder_warn};
use parking_lot::RwLock;

use super::slot::RowSlot;
use super::traits::{AdapterSignals, RowRenderer, RowSource, SlotInflater};
use crate::config::{AdapterConfig, LayoutId};
use crate::error::{AdapterError, AdapterResult};

/// Type alias for a renderer factory function.
pub type RendererFactory<R> = Arc<dyn Fn() -> R + Send + Sync>;

/// Which of the two row kinds a render call produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowKind {
    Normal,
    DropDown,
}

/// An adapter that holds its own list of items and renders them into
/// recyclable row slots.
///
/// The adapter keeps a private copy of the list, so changing the caller's
/// vector after `set_list` has no effect on what is displayed. Renderers are
/// built by the factory passed at construction and live inside the slots
/// the adapter hands out; the adapter itself never keeps a slot.
///
/// The selected item is compared by value against each row as it is
/// painted. Selecting does not emit a refresh, and removing the selected
/// item from the list does not clear the selection.
///
/// # Example
///
/// ```
/// use listholder::adapter::{ListAdapter, RowRenderer};
/// use listholder::config::{AdapterConfig, LayoutId};
///
/// struct Row;
///
/// impl RowRenderer<String> for Row {
///     type View = String;
///
///     fn attach(&mut self, _view: &mut String) {}
///
///     fn fill(&mut self, view: &mut String, item: &String, is_selected: bool) {
///         *view = if is_selected { format!("> {item}") } else { item.clone() };
///     }
/// }
///
/// let adapter = ListAdapter::new(AdapterConfig::new(LayoutId::new(1)), || Row).unwrap();
/// adapter.set_list(&["Apple".to_string(), "Banana".to_string()]);
/// adapter.set_selected_item("Banana".to_string());
///
/// let mut inflate = |_layout: LayoutId| String::new();
/// let slot = adapter.render_row(1, None, &mut inflate).unwrap();
/// assert_eq!(slot.view(), "> Banana");
/// ```
pub struct ListAdapter<T, R> {
    items: RwLock<Vec<T>>,
    selected: RwLock<Option<T>>,
    factory: RendererFactory<R>,
    config: AdapterConfig,
    signals: AdapterSignals,
}

impl<T, R> std::fmt::Debug for ListAdapter<T, R>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListAdapter")
            .field("items", &*self.items.read())
            .field("selected", &*self.selected.read())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<T, R> ListAdapter<T, R>
where
    T: Clone + PartialEq + Hash + Send + Sync + 'static,
    R: RowRenderer<T>,
{
    /// Creates an empty adapter.
    ///
    /// `factory` is called whenever a row needs a new renderer.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::InvalidLayout`] if `config` names an invalid
    /// layout.
    pub fn new<F>(config: AdapterConfig, factory: F) -> AdapterResult<Self>
    where
        F: Fn() -> R + Send + Sync + 'static,
    {
        config.validate()?;
        Ok(Self::from_parts(config, Arc::new(factory), Vec::new()))
    }

    /// Returns a builder for configuring an adapter step by step.
    pub fn builder() -> ListAdapterBuilder<T, R> {
        ListAdapterBuilder::new()
    }

    fn from_parts(config: AdapterConfig, factory: RendererFactory<R>, items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
            selected: RwLock::new(None),
            factory,
            config,
            signals: AdapterSignals::new(),
        }
    }

    /// The adapter's layout configuration.
    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Signals views connect to for refresh notifications.
    pub fn signals(&self) -> &AdapterSignals {
        &self.signals
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Replaces the whole list with a copy of `items`.
    pub fn set_list(&self, items: &[T]) {
        holder_debug!(len = items.len(), "set_list");
        self.signals.emit_data_set_changed(|| {
            let mut list = self.items.write();
            list.clear();
            list.extend_from_slice(items);
        });
    }

    /// Removes every item.
    pub fn clear_list(&self) {
        holder_debug!("clear_list");
        self.signals.emit_data_set_changed(|| {
            self.items.write().clear();
        });
    }

    /// Appends `item` to the end of the list.
    pub fn add_item(&self, item: T) {
        self.signals.emit_data_set_changed(|| {
            let mut list = self.items.write();
            list.push(item);
            holder_debug!(len = list.len(), "add_item");
        });
    }

    /// Removes the first item equal to `item`.
    ///
    /// Returns `false` if no item matched; that is not an error and the
    /// list is left untouched. A refresh is emitted either way.
    pub fn remove_item(&self, item: &T) -> bool {
        self.signals.emit_data_set_changed(|| {
            let mut list = self.items.write();
            match list.iter().position(|candidate| candidate == item) {
                Some(position) => {
                    list.remove(position);
                    holder_debug!(position, "remove_item");
                    true
                }
                None => {
                    holder_trace!("remove_item: no matching item");
                    false
                }
            }
        })
    }

    /// Removes and returns the item at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::OutOfBounds`] if `position >= count()`. The
    /// list is unchanged and no refresh is emitted.
    pub fn remove_item_at(&self, position: usize) -> AdapterResult<T> {
        let removed = {
            let mut list = self.items.write();
            check_bounds(position, list.len())?;
            list.remove(position)
        };
        holder_debug!(position, "remove_item_at");
        self.signals.data_set_changed.emit(());
        Ok(removed)
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Marks `item` as the selected item.
    ///
    /// `item` does not have to be in the list. Rows already on screen are
    /// not repainted; the selection shows up on their next render.
    pub fn set_selected_item(&self, item: T) {
        holder_debug!("set_selected_item");
        *self.selected.write() = Some(item);
    }

    /// The currently selected item, if any.
    pub fn selected_item(&self) -> Option<T> {
        self.selected.read().clone()
    }

    fn is_selected(&self, item: &T) -> bool {
        self.selected.read().as_ref() == Some(item)
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Number of items in the list.
    pub fn count(&self) -> usize {
        self.items.read().len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Returns a copy of the item at `position`.
    pub fn item_at(&self, position: usize) -> AdapterResult<T> {
        let list = self.items.read();
        check_bounds(position, list.len())?;
        Ok(list[position].clone())
    }

    /// Returns a reference to the items (read-only access).
    ///
    /// Mutations block while the returned guard is alive.
    pub fn items(&self) -> impl std::ops::Deref<Target = Vec<T>> + '_ {
        self.items.read()
    }

    /// Returns an identifier for the row at `position`, derived from the
    /// item's hash.
    ///
    /// Equal items share an id, and distinct items may collide.
    pub fn stable_id_for(&self, position: usize) -> AdapterResult<u64> {
        let list = self.items.read();
        check_bounds(position, list.len())?;
        let mut hasher = DefaultHasher::new();
        list[position].hash(&mut hasher);
        Ok(hasher.finish())
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Creates a fresh renderer from the factory.
    pub fn create_renderer(&self) -> R {
        (self.factory)()
    }

    /// Produces the normal row for `position`.
    ///
    /// If `recycled` is a slot previously returned by this adapter for the
    /// same layout, it is repainted in place and returned. Otherwise a view
    /// is inflated and a new renderer is created and attached to it.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::OutOfBounds`] if `position >= count()`.
    /// Nothing is inflated in that case, and `recycled` is dropped with the
    /// call; hosts that want to keep it should check `count()` first.
    pub fn render_row<I>(
        &self,
        position: usize,
        recycled: Option<RowSlot<R::View, R>>,
        inflater: &mut I,
    ) -> AdapterResult<RowSlot<R::View, R>>
    where
        I: SlotInflater<View = R::View>,
    {
        self.render(RowKind::Normal, position, recycled, inflater)
    }

    /// Produces the drop-down row for `position`.
    ///
    /// Same as [`render_row`](Self::render_row), but uses the drop-down
    /// layout and paints through [`RowRenderer::fill_as_drop_down`].
    pub fn render_drop_down_row<I>(
        &self,
        position: usize,
        recycled: Option<RowSlot<R::View, R>>,
        inflater: &mut I,
    ) -> AdapterResult<RowSlot<R::View, R>>
    where
        I: SlotInflater<View = R::View>,
    {
        self.render(RowKind::DropDown, position, recycled, inflater)
    }

    fn layout_for(&self, kind: RowKind) -> LayoutId {
        match kind {
            RowKind::Normal => self.config.item_layout,
            RowKind::DropDown => self.config.drop_down_layout(),
        }
    }

    fn render<I>(
        &self,
        kind: RowKind,
        position: usize,
        recycled: Option<RowSlot<R::View, R>>,
        inflater: &mut I,
    ) -> AdapterResult<RowSlot<R::View, R>>
    where
        I: SlotInflater<View = R::View>,
    {
        // Painting happens on a snapshot so renderers never run under the list lock.
        let item = self.item_at(position)?;
        let is_selected = self.is_selected(&item);
        let layout = self.layout_for(kind);

        let mut slot = match recycled {
            Some(slot) if slot.layout() == layout => {
                holder_render_trace!(position, ?kind, "reusing slot");
                slot
            }
            stale => {
                if let Some(stale) = stale {
                    holder_render_trace!(
                        position,
                        ?kind,
                        from = %stale.layout(),
                        to = %layout,
                        "discarding slot with mismatched layout"
                    );
                }
                holder_render_trace!(position, ?kind, %layout, "inflating slot");
                let view = inflater.inflate(layout);
                RowSlot::attach::<T>(layout, view, self.create_renderer())
            }
        };

        match kind {
            RowKind::Normal => slot.fill(&item, is_selected),
            RowKind::DropDown => slot.fill_as_drop_down(&item, is_selected),
        }
        Ok(slot)
    }
}

impl<T, R> RowSource for ListAdapter<T, R>
where
    T: Clone + PartialEq + Hash + Send + Sync + 'static,
    R: RowRenderer<T>,
{
    type Item = T;
    type View = R::View;
    type Renderer = R;

    fn item_count(&self) -> usize {
        self.count()
    }

    fn item_at(&self, position: usize) -> AdapterResult<T> {
        ListAdapter::item_at(self, position)
    }

    fn stable_id_for(&self, position: usize) -> AdapterResult<u64> {
        ListAdapter::stable_id_for(self, position)
    }

    fn render_row<I>(
        &self,
        position: usize,
        recycled: Option<RowSlot<R::View, R>>,
        inflater: &mut I,
    ) -> AdapterResult<RowSlot<R::View, R>>
    where
        I: SlotInflater<View = R::View>,
    {
        ListAdapter::render_row(self, position, recycled, inflater)
    }

    fn render_drop_down_row<I>(
        &self,
        position: usize,
        recycled: Option<RowSlot<R::View, R>>,
        inflater: &mut I,
    ) -> AdapterResult<RowSlot<R::View, R>>
    where
        I: SlotInflater<View = R::View>,
    {
        ListAdapter::render_drop_down_row(self, position, recycled, inflater)
    }
}

fn check_bounds(position: usize, len: usize) -> AdapterResult<()> {
    if position < len {
        Ok(())
    } else {
        holder_warn!(position, len, "position out of bounds");
        Err(AdapterError::OutOfBounds { position, len })
    }
}

/// Builder for [`ListAdapter`].
///
/// # Example
///
/// ```
/// use listholder::adapter::{ListAdapter, RowRenderer};
/// use listholder::config::LayoutId;
///
/// struct Row;
///
/// impl RowRenderer<u32> for Row {
///     type View = ();
///     fn attach(&mut self, _view: &mut ()) {}
///     fn fill(&mut self, _view: &mut (), _item: &u32, _is_selected: bool) {}
/// }
///
/// let adapter = ListAdapter::builder()
///     .item_layout(LayoutId::new(1))
///     .items(vec![1u32, 2, 3])
///     .renderer_factory(|| Row)
///     .build()
///     .unwrap();
///
/// assert_eq!(adapter.count(), 3);
/// ```
pub struct ListAdapterBuilder<T, R> {
    config: AdapterConfig,
    items: Vec<T>,
    factory: Option<RendererFactory<R>>,
}

impl<T, R> Default for ListAdapterBuilder<T, R> {
    fn default() -> Self {
        Self {
            config: AdapterConfig::default(),
            items: Vec::new(),
            factory: None,
        }
    }
}

impl<T, R> ListAdapterBuilder<T, R>
where
    T: Clone + PartialEq + Hash + Send + Sync + 'static,
    R: RowRenderer<T>,
{
    /// Creates a builder with an empty config and no factory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole layout configuration.
    pub fn config(mut self, config: AdapterConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the layout for normal rows.
    pub fn item_layout(mut self, layout: LayoutId) -> Self {
        self.config.item_layout = layout;
        self
    }

    /// Sets the layout for drop-down rows.
    pub fn drop_down_layout(mut self, layout: LayoutId) -> Self {
        self.config.drop_down_layout = Some(layout);
        self
    }

    /// Sets the initial items.
    pub fn items(mut self, items: Vec<T>) -> Self {
        self.items = items;
        self
    }

    /// Sets the function that creates renderers.
    pub fn renderer_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
    {
        self.factory = Some(Arc::new(factory));
        self
    }

    /// Builds the adapter.
    ///
    /// # Errors
    ///
    /// - [`AdapterError::MissingRendererFactory`] if no factory was set.
    /// - [`AdapterError::InvalidLayout`] if a configured layout is invalid.
    pub fn build(self) -> AdapterResult<ListAdapter<T, R>> {
        let factory = self.factory.ok_or(AdapterError::MissingRendererFactory)?;
        self.config.validate()?;
        Ok(ListAdapter::from_parts(self.config, factory, self.items))
    }
}
