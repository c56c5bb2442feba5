pub(crate) struct ListView<T> {
  items: Vec<T>,
  offset: usize,
  selected: usize,
}

impl<T> Default for ListView<T> {
  fn default() -> Self {
    Self {
      items: Vec::new(),
      offset: 0,
      selected: 0,
    }
  }
}

impl<T> ListView<T> {
  pub(crate) fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub(crate) fn items(&self) -> &[T] {
    &self.items
  }

  pub(crate) fn move_by(&mut self, delta: isize) {
    let current = self.selected_index().unwrap_or(0);

    let target = if delta >= 0 {
      current.saturating_add(delta.unsigned_abs())
    } else {
      current.saturating_sub(delta.unsigned_abs())
    };

    self.set_selected(target);
  }

  pub(crate) fn new(items: Vec<T>) -> Self {
    Self {
      items,
      offset: 0,
      selected: 0,
    }
  }

  pub(crate) fn offset(&self) -> usize {
    let selected = self.selected_index().unwrap_or(0);

    if self.items.is_empty() {
      0
    } else {
      self.offset.min(selected)
    }
  }

  /// Swaps in a fresh set of items, keeping the selection and scroll
  /// position where they still fit.
  pub(crate) fn replace(&mut self, items: Vec<T>) {
    let (selected, offset) = (self.selected, self.offset);

    self.items = items;
    self.set_selected(selected);
    self.set_offset(offset);
  }

  pub(crate) fn selected_index(&self) -> Option<usize> {
    if self.items.is_empty() {
      None
    } else {
      Some(self.selected.min(self.items.len().saturating_sub(1)))
    }
  }

  pub(crate) fn selected_item(&self) -> Option<&T> {
    self
      .selected_index()
      .and_then(|index| self.items.get(index))
  }

  pub(crate) fn set_offset(&mut self, offset: usize) {
    if self.items.is_empty() {
      self.offset = 0;
    } else {
      let max_offset = self.items.len().saturating_sub(1);
      self.offset = offset.min(max_offset);
    }
  }

  pub(crate) fn set_selected(&mut self, index: usize) {
    if self.items.is_empty() {
      self.selected = 0;
    } else {
      self.selected = index.min(self.items.len().saturating_sub(1));
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn selected_index_is_none_when_empty() {
    let view = ListView::<i32>::default();
    assert_eq!(view.selected_index(), None);
    assert!(view.selected_item().is_none());
  }

  #[test]
  fn selection_and_offset_are_clamped_to_bounds() {
    let mut view = ListView::new(vec![1, 2, 3]);

    view.set_selected(10);
    assert_eq!(view.selected_index(), Some(2));

    view.set_offset(10);
    assert_eq!(view.offset(), 2);
  }

  #[test]
  fn move_by_saturates_at_both_ends() {
    let mut view = ListView::new(vec!['a', 'b', 'c']);

    view.move_by(-5);
    assert_eq!(view.selected_item(), Some(&'a'));

    view.move_by(1);
    assert_eq!(view.selected_item(), Some(&'b'));

    view.move_by(isize::MAX);
    assert_eq!(view.selected_item(), Some(&'c'));
  }

  #[test]
  fn replace_keeps_selection_when_it_still_fits() {
    let mut view = ListView::new(vec![1, 2, 3, 4]);
    view.set_selected(2);

    view.replace(vec![5, 6, 7, 8, 9]);
    assert_eq!(view.selected_item(), Some(&7));

    view.replace(vec![1]);
    assert_eq!(view.selected_index(), Some(0));
    assert_eq!(view.offset(), 0);
  }

  #[test]
  fn replace_with_nothing_clears_selection() {
    let mut view = ListView::new(vec![1, 2]);
    view.set_selected(1);

    view.replace(Vec::new());

    assert!(view.is_empty());
    assert_eq!(view.selected_index(), None);
  }
}
