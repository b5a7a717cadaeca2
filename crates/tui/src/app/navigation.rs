//! Table selection movement.

use logview_config::constants::PAGE_SIZE;

use crate::app::App;

impl App {
    fn record_count(&self) -> usize {
        self.loader.records().map_or(0, <[_]>::len)
    }

    /// Move the selection by `delta` rows, clamped to the collection.
    pub(crate) fn move_selection(&mut self, delta: isize) {
        let len = self.record_count();
        if len == 0 {
            self.table_state.select(None);
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(len - 1);
        self.table_state.select(Some(next));
    }

    pub(crate) fn page_up(&mut self) {
        self.move_selection(-(PAGE_SIZE as isize));
    }

    pub(crate) fn page_down(&mut self) {
        self.move_selection(PAGE_SIZE as isize);
    }

    pub(crate) fn select_first(&mut self) {
        let selected = (self.record_count() > 0).then_some(0);
        self.table_state.select(selected);
    }

    pub(crate) fn select_last(&mut self) {
        let selected = self.record_count().checked_sub(1);
        self.table_state.select(selected);
    }
}
