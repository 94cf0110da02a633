//! Display-ready list rows.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Handler invoked with the originating entity when a row is selected.
pub type SelectionHandler<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Date rendering requested for a row, where one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// Spelled-out date with time of day.
    Long,
    /// Compact numeric date.
    Short,
}

/// An immutable display record plus its bound selection action.
///
/// Adapters construct these at mapping time; after delivery the presentation
/// layer owns them and nothing in this crate mutates them. Equality and
/// `Debug` cover the display fields only — the selection action is opaque.
#[derive(Clone)]
pub struct ItemViewModel {
    title: String,
    subtitle: String,
    date_style: Option<DateStyle>,
    on_select: Arc<dyn Fn() + Send + Sync>,
}

impl ItemViewModel {
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        on_select: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            date_style: None,
            on_select: Arc::new(on_select),
        }
    }

    pub fn with_date_style(mut self, style: DateStyle) -> Self {
        self.date_style = Some(style);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn date_style(&self) -> Option<DateStyle> {
        self.date_style
    }

    /// Fires the bound selection action.
    pub fn select(&self) {
        (self.on_select)();
    }
}

impl Debug for ItemViewModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemViewModel")
            .field("title", &self.title)
            .field("subtitle", &self.subtitle)
            .field("date_style", &self.date_style)
            .finish_non_exhaustive()
    }
}

impl PartialEq for ItemViewModel {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.subtitle == other.subtitle
            && self.date_style == other.date_style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn select_fires_the_bound_action_once_per_invocation() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let vm = ItemViewModel::new("Ana", "+1 555 0100", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        vm.select();
        vm.select();

        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn equality_ignores_the_selection_action() {
        let a = ItemViewModel::new("Ana", "+1 555 0100", || {});
        let b = ItemViewModel::new("Ana", "+1 555 0100", || panic!("never fired"));

        assert_eq!(a, b);
        assert_ne!(a, a.clone().with_date_style(DateStyle::Short));
    }
}
