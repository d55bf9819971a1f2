//! Recyclable row slots.

use crate::config::LayoutId;

use super::traits::RowRenderer;

/// A materialized row: the host's view together with the renderer attached
/// to it.
///
/// Slots are produced by the adapter's render calls and owned by the host
/// view afterwards. When a row scrolls out of sight the host passes its
/// slot back into the next render call, and the adapter repaints it through
/// the renderer it already carries instead of inflating a new view.
#[derive(Debug)]
pub struct RowSlot<V, R> {
    view: V,
    renderer: R,
    layout: LayoutId,
}

impl<V, R> RowSlot<V, R> {
    /// Attaches `renderer` to a freshly inflated `view`.
    pub(crate) fn attach<T>(layout: LayoutId, mut view: V, mut renderer: R) -> Self
    where
        R: RowRenderer<T, View = V>,
    {
        renderer.attach(&mut view);
        Self {
            view,
            renderer,
            layout,
        }
    }

    pub(crate) fn fill<T>(&mut self, item: &T, is_selected: bool)
    where
        R: RowRenderer<T, View = V>,
    {
        self.renderer.fill(&mut self.view, item, is_selected);
    }

    pub(crate) fn fill_as_drop_down<T>(&mut self, item: &T, is_selected: bool)
    where
        R: RowRenderer<T, View = V>,
    {
        self.renderer
            .fill_as_drop_down(&mut self.view, item, is_selected);
    }

    /// The row's view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The renderer attached to this row.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The layout this row was inflated from.
    pub fn layout(&self) -> LayoutId {
        self.layout
    }

    /// Splits the slot into its view and renderer.
    pub fn into_parts(self) -> (V, R) {
        (self.view, self.renderer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        attached: usize,
        fills: Vec<(i32, bool, bool)>,
    }

    impl RowRenderer<i32> for Recorder {
        type View = String;

        fn attach(&mut self, view: &mut String) {
            self.attached += 1;
            view.push_str("attached");
        }

        fn fill(&mut self, view: &mut String, item: &i32, is_selected: bool) {
            self.fills.push((*item, is_selected, false));
            *view = item.to_string();
        }

        fn fill_as_drop_down(&mut self, view: &mut String, item: &i32, is_selected: bool) {
            self.fills.push((*item, is_selected, true));
            *view = format!("v{item}");
        }
    }

    #[test]
    fn test_attach_runs_once() {
        let slot = RowSlot::attach::<i32>(LayoutId::new(1), String::new(), Recorder::default());
        assert_eq!(slot.renderer().attached, 1);
        assert_eq!(slot.view(), "attached");
        assert_eq!(slot.layout(), LayoutId::new(1));
    }

    #[test]
    fn test_fill_paints_own_view() {
        let mut slot = RowSlot::attach::<i32>(LayoutId::new(1), String::new(), Recorder::default());

        slot.fill(&5i32, true);
        assert_eq!(slot.view(), "5");
        slot.fill_as_drop_down(&6i32, false);
        assert_eq!(slot.view(), "v6");

        let (view, renderer) = slot.into_parts();
        assert_eq!(view, "v6");
        assert_eq!(renderer.attached, 1);
        assert_eq!(renderer.fills, vec![(5, true, false), (6, false, true)]);
    }
}
