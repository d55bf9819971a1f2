//! Contracts between the adapter, the row renderers and the host view.

use listholder_core::Signal;

use super::slot::RowSlot;
use crate::config::LayoutId;
use crate::error::AdapterResult;

/// Paints items of type `T` into a row view.
///
/// A renderer is created by the adapter's factory, attached once to a
/// freshly inflated view, and then filled any number of times as its slot
/// is recycled for different positions. It only ever touches the view of
/// the slot it was attached to; the slot passes that view back in on every
/// fill.
///
/// # Example
///
/// ```
/// use listholder::adapter::RowRenderer;
///
/// #[derive(Default)]
/// struct Label {
///     text: String,
///     bold: bool,
/// }
///
/// struct NameRenderer;
///
/// impl RowRenderer<String> for NameRenderer {
///     type View = Label;
///
///     fn attach(&mut self, view: &mut Label) {
///         view.text.clear();
///     }
///
///     fn fill(&mut self, view: &mut Label, item: &String, is_selected: bool) {
///         view.text.clone_from(item);
///         view.bold = is_selected;
///     }
/// }
/// ```
pub trait RowRenderer<T> {
    /// The view type this renderer paints into.
    type View;

    /// Binds this renderer to a newly inflated view.
    ///
    /// Called exactly once, right after the renderer is created.
    fn attach(&mut self, view: &mut Self::View);

    /// Paints `item` into the attached view, highlighting it when selected.
    fn fill(&mut self, view: &mut Self::View, item: &T, is_selected: bool);

    /// Paints `item` for a drop-down (popup) row.
    fn fill_as_drop_down(&mut self, view: &mut Self::View, item: &T, is_selected: bool) {
        self.fill(view, item, is_selected);
    }
}

/// Materializes row views for the adapter.
///
/// This is the host's half of slot creation: given the layout a row kind
/// uses, it builds a fresh view. Building a view is assumed to be much more
/// expensive than repainting one, so the adapter only asks for one when no
/// compatible recycled slot was handed back.
pub trait SlotInflater {
    /// The view type produced.
    type View;

    /// Builds a new view from `layout`.
    fn inflate(&mut self, layout: LayoutId) -> Self::View;
}

impl<V, F> SlotInflater for F
where
    F: FnMut(LayoutId) -> V,
{
    type View = V;

    fn inflate(&mut self, layout: LayoutId) -> V {
        self(layout)
    }
}

/// Signals emitted by a [`ListAdapter`](super::ListAdapter).
///
/// Views connect to these to learn when they must re-query the adapter.
#[derive(Debug, Default)]
pub struct AdapterSignals {
    /// Emitted after every list mutation. The whole list should be treated
    /// as changed: re-read the count and re-render every visible row.
    pub data_set_changed: Signal<()>,
}

impl AdapterSignals {
    /// Creates a new set of adapter signals.
    pub fn new() -> Self {
        Self {
            data_set_changed: Signal::new(),
        }
    }

    /// Runs `mutate`, then emits `data_set_changed`.
    ///
    /// `mutate` must release any lock it takes before returning so that
    /// connected slots can query the adapter.
    pub fn emit_data_set_changed<F, R>(&self, mutate: F) -> R
    where
        F: FnOnce() -> R,
    {
        let result = mutate();
        self.data_set_changed.emit(());
        result
    }
}

/// A queryable, recyclable source of rows for a pull-based list view.
///
/// A view sizes its scroll area from [`item_count`](Self::item_count) and
/// asks for one row at a time as rows scroll into view, handing back a slot
/// that scrolled out when it has one.
pub trait RowSource {
    /// Item type backing each row.
    type Item;
    /// View type of produced slots.
    type View;
    /// Renderer attached to produced slots.
    type Renderer: RowRenderer<Self::Item, View = Self::View>;

    /// Number of rows.
    fn item_count(&self) -> usize;

    /// Item backing the row at `position`.
    fn item_at(&self, position: usize) -> AdapterResult<Self::Item>;

    /// Identifier of the row at `position`, used for diffing and animations.
    fn stable_id_for(&self, position: usize) -> AdapterResult<u64>;

    /// Produces the normal row at `position`, reusing `recycled` when possible.
    ///
    /// A slot passed to a call that fails is dropped.
    fn render_row<I>(
        &self,
        position: usize,
        recycled: Option<RowSlot<Self::View, Self::Renderer>>,
        inflater: &mut I,
    ) -> AdapterResult<RowSlot<Self::View, Self::Renderer>>
    where
        I: SlotInflater<View = Self::View>;

    /// Produces the drop-down row at `position`, reusing `recycled` when possible.
    fn render_drop_down_row<I>(
        &self,
        position: usize,
        recycled: Option<RowSlot<Self::View, Self::Renderer>>,
        inflater: &mut I,
    ) -> AdapterResult<RowSlot<Self::View, Self::Renderer>>
    where
        I: SlotInflater<View = Self::View>;
}
