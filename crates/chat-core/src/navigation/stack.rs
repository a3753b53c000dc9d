//! Page and modal stacks
//!
//! Stacks only look at the identity and capabilities of what they hold.
//! Hooks always run after the stack's own borrow has been released, so a
//! hook may safely call back into the navigator that owns the stack.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::debug;

use super::{ModalRef, Navigable, Page, PageNavigator, PageRef};

/// Delivers the one-time close notification if the entity is closable
pub(crate) fn notify_closed<N: Navigable + ?Sized>(entity: &N) {
    if let Some(closable) = entity.as_closable() {
        if entity.base().mark_closed() {
            debug!(id = entity.id(), "closed");
            closable.on_closed();
        }
    }
}

/// Ordered, identity-deduplicated pages of one navigation scope.
///
/// The last page is the one on screen.
pub struct PageStack {
    /// Id of the navigator owning this stack, used in logs
    owner: String,
    pages: RefCell<Vec<PageRef>>,
}

impl PageStack {
    /// Create an empty stack for the navigator `owner`
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            pages: RefCell::new(Vec::new()),
        }
    }

    /// The page on top
    pub fn top(&self) -> Option<PageRef> {
        self.pages.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.pages.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.borrow().is_empty()
    }

    /// Ids from bottom to top
    pub fn ids(&self) -> Vec<String> {
        self.pages.borrow().iter().map(|page| page.id().to_string()).collect()
    }

    /// Whether a page with `id` is anywhere on the stack
    pub fn contains(&self, id: &str) -> bool {
        self.pages.borrow().iter().any(|page| page.id() == id)
    }

    /// Puts `page` on top, attached to `parent`.
    ///
    /// Any page already on the stack with the same id is removed first and
    /// receives its removal hooks. Pushing always changes the top, so this
    /// returns true.
    pub fn push(&self, page: PageRef, parent: Weak<dyn PageNavigator>) -> bool {
        let displaced: Vec<PageRef> = {
            let mut pages = self.pages.borrow_mut();
            let (displaced, kept) = pages.drain(..).partition(|old| old.id() == page.id());
            *pages = kept;
            displaced
        };

        debug!(
            stack = %self.owner,
            page = page.id(),
            displaced = displaced.len(),
            "pushing page"
        );

        for old in displaced.iter().rev() {
            old.on_navigated_from();
            // Re-pushing the same instance is a move, not a close
            if !Rc::ptr_eq(old, &page) {
                notify_closed(old.as_ref());
            }
        }

        page.on_attached_to_navigator(parent);
        self.pages.borrow_mut().push(Rc::clone(&page));
        page.on_navigated_to();
        true
    }

    /// Removes the page on top. Returns false when the stack was empty.
    ///
    /// The page underneath is not re-displayed here; that is up to the navigator.
    pub fn pop(&self) -> bool {
        let Some(top) = self.pages.borrow_mut().pop() else {
            return false;
        };

        debug!(stack = %self.owner, page = top.id(), "popping page");
        top.on_navigated_from();
        notify_closed(top.as_ref());
        true
    }

    /// Removes pages from the top down to, but not including, the topmost
    /// page matching `keep`.
    ///
    /// Nothing is removed when no page matches or when the top page already
    /// matches; both report false. `keep` must not touch this stack.
    pub fn pop_after<F>(&self, keep: F) -> bool
    where
        F: Fn(&dyn Page) -> bool,
    {
        let removed = {
            let mut pages = self.pages.borrow_mut();
            let Some(keep_index) = pages.iter().rposition(|page| keep(page.as_ref())) else {
                return false;
            };
            pages.split_off(keep_index + 1)
        };

        if removed.is_empty() {
            return false;
        }

        debug!(stack = %self.owner, count = removed.len(), "popping pages");
        for page in removed.iter().rev() {
            page.on_navigated_from();
            notify_closed(page.as_ref());
        }
        true
    }

    /// Tears down every page and leaves the stack empty.
    ///
    /// Returns whether there was anything to tear down.
    pub fn clear(&self) -> bool {
        self.replace(Vec::new(), None, false)
    }

    /// Tears down every page and replaces the contents with `new_pages`,
    /// attached to `parent`.
    ///
    /// Only the last page of each id is installed; earlier pages sharing an
    /// id are closed without ever being displayed. Torn down pages are
    /// detached from their navigator unless they are reinstalled. The new
    /// top, if any, is displayed. Returns whether the stack held or now
    /// holds anything.
    pub fn reset(&self, new_pages: Vec<PageRef>, parent: Weak<dyn PageNavigator>) -> bool {
        self.replace(new_pages, Some(parent), false)
    }

    /// Tears down every page and leaves exactly `page`, attached to `parent`
    pub fn reset_to(&self, page: PageRef, parent: Weak<dyn PageNavigator>) -> bool {
        self.reset(vec![page], parent)
    }

    /// Closes and detaches every page after the owning host has been
    /// navigated away from.
    ///
    /// The host already forwarded navigated-from to the top page, so only the
    /// pages underneath receive it here.
    pub fn clear_departed(&self) -> bool {
        self.replace(Vec::new(), None, true)
    }

    fn replace(
        &self,
        new_pages: Vec<PageRef>,
        parent: Option<Weak<dyn PageNavigator>>,
        top_departed: bool,
    ) -> bool {
        let old = self.pages.take();
        if old.is_empty() && new_pages.is_empty() {
            return false;
        }

        let (new_pages, dropped) = dedup_by_id(new_pages);

        debug!(
            stack = %self.owner,
            removed = old.len(),
            installed = new_pages.len(),
            dropped = dropped.len(),
            "resetting stack"
        );

        for (depth, page) in old.iter().rev().enumerate() {
            if depth > 0 || !top_departed {
                page.on_navigated_from();
            }
            let reinstalled = new_pages.iter().any(|new| Rc::ptr_eq(new, page));
            if !reinstalled {
                notify_closed(page.as_ref());
                page.on_detached_from_navigator();
            }
        }

        for page in &dropped {
            let torn_down = old.iter().any(|old| Rc::ptr_eq(old, page));
            let kept = new_pages.iter().any(|new| Rc::ptr_eq(new, page));
            if !torn_down && !kept {
                notify_closed(page.as_ref());
            }
        }

        if let Some(parent) = parent {
            for page in &new_pages {
                page.on_attached_to_navigator(parent.clone());
            }
        }

        let top = new_pages.last().cloned();
        *self.pages.borrow_mut() = new_pages;
        if let Some(top) = top {
            top.on_navigated_to();
        }
        true
    }
}

/// Splits `pages` into the last page of each id, in order, and the rest
fn dedup_by_id(pages: Vec<PageRef>) -> (Vec<PageRef>, Vec<PageRef>) {
    let mut kept: Vec<PageRef> = Vec::with_capacity(pages.len());
    let mut dropped = Vec::new();
    for page in pages.into_iter().rev() {
        if kept.iter().any(|later| later.id() == page.id()) {
            dropped.push(page);
        } else {
            kept.push(page);
        }
    }
    kept.reverse();
    (kept, dropped)
}

/// Ordered modal overlays of the window. The last one is visible.
#[derive(Default)]
pub struct ModalStack {
    modals: RefCell<Vec<ModalRef>>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// The visible modal
    pub fn top(&self) -> Option<ModalRef> {
        self.modals.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.modals.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.modals.borrow().is_empty()
    }

    /// Ids from bottom to top
    pub fn ids(&self) -> Vec<String> {
        self.modals.borrow().iter().map(|modal| modal.id().to_string()).collect()
    }

    /// Attaches `modal` to `parent`, puts it on top and resumes it
    pub fn show(&self, modal: ModalRef, parent: Weak<dyn PageNavigator>) -> bool {
        debug!(modal = modal.id(), below = self.len(), "showing modal");
        modal.on_attached_to_navigator(parent);
        self.modals.borrow_mut().push(Rc::clone(&modal));
        modal.on_resume();
        true
    }

    /// Removes the topmost modal with `modal_id`. Returns false when there is none.
    pub fn dismiss(&self, modal_id: &str) -> bool {
        let dismissed = {
            let mut modals = self.modals.borrow_mut();
            let Some(index) = modals.iter().rposition(|modal| modal.id() == modal_id) else {
                return false;
            };
            modals.remove(index)
        };

        debug!(modal = modal_id, "dismissing modal");
        dismissed.on_dismiss();
        notify_closed(dismissed.as_ref());
        true
    }

    /// Dismisses every modal, top first. Returns whether there was any.
    pub fn clear(&self) -> bool {
        let modals = self.modals.take();
        for modal in modals.iter().rev() {
            modal.on_dismiss();
            notify_closed(modal.as_ref());
        }
        !modals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::testing::{
        clear, entries, new_log, parent_of, same_object, RecordingModal, RecordingPage,
    };
    use crate::navigation::SimpleWindowNavigator;
    use std::collections::HashSet;

    fn stack_with(ids: &[&str], log: &crate::navigation::testing::Log) -> (PageStack, Rc<SimpleWindowNavigator>) {
        let window = SimpleWindowNavigator::new(|| {});
        let stack = PageStack::new("test");
        for id in ids {
            stack.push(RecordingPage::closable(id, id, log), parent_of(&window));
        }
        (stack, window)
    }

    #[test]
    fn test_push_attaches_before_display() {
        let log = new_log();
        let window = SimpleWindowNavigator::new(|| {});
        let stack = PageStack::new("test");

        assert!(stack.push(RecordingPage::new("a", "a", &log), parent_of(&window)));

        assert_eq!(entries(&log), vec!["a:attach", "a:to"]);
        assert_eq!(stack.top().map(|page| page.id().to_string()), Some("a".to_string()));
    }

    #[test]
    fn test_push_does_not_touch_covered_page() {
        let log = new_log();
        let (stack, window) = stack_with(&["a"], &log);
        clear(&log);

        stack.push(RecordingPage::new("b", "b", &log), parent_of(&window));

        assert_eq!(entries(&log), vec!["b:attach", "b:to"]);
        assert_eq!(stack.ids(), vec!["a", "b"]);
    }

    #[test]
    fn test_push_displaces_same_identity() {
        let log = new_log();
        let window = SimpleWindowNavigator::new(|| {});
        let stack = PageStack::new("test");
        let first = RecordingPage::closable("a", "a1", &log);
        let second = RecordingPage::closable("a", "a2", &log);

        stack.push(first.clone(), parent_of(&window));
        stack.push(RecordingPage::new("b", "b", &log), parent_of(&window));
        clear(&log);
        stack.push(second.clone(), parent_of(&window));

        assert_eq!(first.closes.get(), 1);
        assert_eq!(second.closes.get(), 0);
        assert_eq!(stack.ids(), vec!["b", "a"]);
        assert!(same_object(&stack.top().unwrap(), &second));
        assert_eq!(
            entries(&log),
            vec!["a1:from", "a1:closed", "a2:attach", "a2:to"]
        );
    }

    #[test]
    fn test_ids_stay_unique_over_pushes() {
        let log = new_log();
        let window = SimpleWindowNavigator::new(|| {});
        let stack = PageStack::new("test");

        for id in ["a", "b", "a", "c", "b", "b", "a", "d", "c"] {
            stack.push(RecordingPage::new(id, id, &log), parent_of(&window));
            let ids = stack.ids();
            let unique: HashSet<_> = ids.iter().collect();
            assert_eq!(unique.len(), ids.len(), "duplicate id in {:?}", ids);
            assert_eq!(ids.last().map(String::as_str), Some(id));
        }
        assert_eq!(stack.ids(), vec!["b", "a", "d", "c"]);
    }

    #[test]
    fn test_repush_same_instance_is_not_a_close() {
        let log = new_log();
        let window = SimpleWindowNavigator::new(|| {});
        let stack = PageStack::new("test");
        let page = RecordingPage::closable("a", "a", &log);

        stack.push(page.clone(), parent_of(&window));
        stack.push(RecordingPage::new("b", "b", &log), parent_of(&window));
        stack.push(page.clone(), parent_of(&window));

        assert_eq!(page.closes.get(), 0);
        assert_eq!(stack.ids(), vec!["b", "a"]);
    }

    #[test]
    fn test_pop_on_empty_is_safe() {
        let log = new_log();
        let stack = PageStack::new("test");

        assert!(!stack.pop());
        assert!(stack.is_empty());
        assert!(entries(&log).is_empty());
    }

    #[test]
    fn test_pop_removes_top_without_redisplay() {
        let log = new_log();
        let (stack, _window) = stack_with(&["a", "b"], &log);
        clear(&log);

        assert!(stack.pop());

        assert_eq!(entries(&log), vec!["b:from", "b:closed"]);
        assert_eq!(stack.ids(), vec!["a"]);
    }

    #[test]
    fn test_pop_after_keeps_matching_page() {
        let log = new_log();
        let (stack, _window) = stack_with(&["x", "y", "z"], &log);
        clear(&log);

        assert!(stack.pop_after(|page| page.id() == "x"));

        assert_eq!(stack.ids(), vec!["x"]);
        assert_eq!(
            entries(&log),
            vec!["z:from", "z:closed", "y:from", "y:closed"]
        );
        assert_eq!(stack.top().unwrap().id(), "x");
    }

    #[test]
    fn test_pop_after_unknown_id_is_noop() {
        let log = new_log();
        let (stack, _window) = stack_with(&["x", "y"], &log);
        clear(&log);

        assert!(!stack.pop_after(|page| page.id() == "missing"));

        assert_eq!(stack.ids(), vec!["x", "y"]);
        assert!(entries(&log).is_empty());
    }

    #[test]
    fn test_pop_after_matching_top_is_noop() {
        let log = new_log();
        let (stack, _window) = stack_with(&["x", "y"], &log);
        clear(&log);

        assert!(!stack.pop_after(|page| page.id() == "y"));
        assert!(!PageStack::new("empty").pop_after(|_| true));
        assert_eq!(stack.len(), 2);
        assert!(entries(&log).is_empty());
    }

    #[test]
    fn test_reset_tears_everything_down_once() {
        let log = new_log();
        let window = SimpleWindowNavigator::new(|| {});
        let stack = PageStack::new("test");
        let a = RecordingPage::closable("a", "a", &log);
        let b = RecordingPage::closable("b", "b", &log);
        stack.push(a.clone(), parent_of(&window));
        stack.push(b.clone(), parent_of(&window));
        clear(&log);

        assert!(stack.clear());

        assert!(stack.is_empty());
        assert_eq!(a.closes.get(), 1);
        assert_eq!(b.closes.get(), 1);
        assert_eq!(entries(&log), vec!["b:from", "b:closed", "a:from", "a:closed"]);
        assert!(a.base().parent_navigator().is_none());
        assert!(b.base().parent_navigator().is_none());

        // Nothing left to tear down
        assert!(!stack.clear());
        assert_eq!(a.closes.get(), 1);
    }

    #[test]
    fn test_reset_to_attaches_replacement() {
        let log = new_log();
        let (stack, window) = stack_with(&["a", "b"], &log);
        let replacement = RecordingPage::new("c", "c", &log);
        clear(&log);

        assert!(stack.reset_to(replacement.clone(), parent_of(&window)));

        assert_eq!(stack.ids(), vec!["c"]);
        assert_eq!(
            entries(&log),
            vec!["b:from", "b:closed", "a:from", "a:closed", "c:attach", "c:to"]
        );
        let parent = replacement.base().parent_navigator().unwrap();
        assert!(same_object(&parent, &window));
    }

    #[test]
    fn test_reset_keeps_reinstalled_instance_open() {
        let log = new_log();
        let window = SimpleWindowNavigator::new(|| {});
        let stack = PageStack::new("test");
        let page = RecordingPage::closable("a", "a", &log);
        stack.push(page.clone(), parent_of(&window));

        stack.reset_to(page.clone(), parent_of(&window));

        assert_eq!(page.closes.get(), 0);
        assert!(page.base().parent_navigator().is_some());
        assert_eq!(stack.ids(), vec!["a"]);
    }

    #[test]
    fn test_reset_installs_one_page_per_id() {
        let log = new_log();
        let (stack, window) = stack_with(&["x"], &log);
        let first = RecordingPage::closable("a", "a1", &log);
        let second = RecordingPage::closable("a", "a2", &log);
        let other = RecordingPage::new("b", "b", &log);
        clear(&log);

        assert!(stack.reset(
            vec![first.clone(), other.clone(), second.clone()],
            parent_of(&window)
        ));

        assert_eq!(stack.ids(), vec!["b", "a"]);
        assert!(same_object(&stack.top().unwrap(), &second));
        assert_eq!(first.closes.get(), 1);
        assert_eq!(second.closes.get(), 0);
        assert_eq!(
            entries(&log),
            vec!["x:from", "x:closed", "a1:closed", "b:attach", "a2:attach", "a2:to"]
        );
        assert!(same_object(&other.base().parent_navigator().unwrap(), &window));
    }

    #[test]
    fn test_reset_with_same_instance_twice_keeps_it_open() {
        let log = new_log();
        let window = SimpleWindowNavigator::new(|| {});
        let stack = PageStack::new("test");
        let page = RecordingPage::closable("a", "a", &log);

        stack.reset(vec![page.clone(), page.clone()], parent_of(&window));

        assert_eq!(stack.ids(), vec!["a"]);
        assert_eq!(page.closes.get(), 0);
    }

    #[test]
    fn test_clear_departed_skips_top_navigated_from() {
        let log = new_log();
        let (stack, _window) = stack_with(&["a", "b"], &log);
        clear(&log);

        assert!(stack.clear_departed());

        assert!(stack.is_empty());
        assert_eq!(entries(&log), vec!["b:closed", "a:from", "a:closed"]);
        assert!(!stack.clear_departed());
    }

    #[test]
    fn test_modal_dismiss_removes_topmost_match_only() {
        let log = new_log();
        let window = SimpleWindowNavigator::new(|| {});
        let modals = ModalStack::new();
        let lower = RecordingModal::new("confirm", "lower", &log);
        let upper = RecordingModal::new("confirm", "upper", &log);
        modals.show(lower.clone(), parent_of(&window));
        modals.show(upper.clone(), parent_of(&window));
        clear(&log);

        assert!(modals.dismiss("confirm"));

        assert_eq!(modals.len(), 1);
        assert!(same_object(&modals.top().unwrap(), &lower));
        assert_eq!(entries(&log), vec!["upper:dismiss", "upper:closed"]);
        assert_eq!(upper.closes.get(), 1);
    }

    #[test]
    fn test_modal_dismiss_unknown_is_noop() {
        let log = new_log();
        let window = SimpleWindowNavigator::new(|| {});
        let modals = ModalStack::new();
        modals.show(RecordingModal::new("info", "info", &log), parent_of(&window));
        clear(&log);

        assert!(!modals.dismiss("missing"));
        assert_eq!(modals.ids(), vec!["info"]);
        assert!(entries(&log).is_empty());
    }

    #[test]
    fn test_modal_clear_dismisses_top_first() {
        let log = new_log();
        let window = SimpleWindowNavigator::new(|| {});
        let modals = ModalStack::new();
        modals.show(RecordingModal::new("one", "one", &log), parent_of(&window));
        modals.show(RecordingModal::new("two", "two", &log), parent_of(&window));
        clear(&log);

        assert!(modals.clear());
        assert!(!modals.clear());
        assert!(modals.is_empty());
        assert_eq!(
            entries(&log),
            vec!["two:dismiss", "two:closed", "one:dismiss", "one:closed"]
        );
    }
}
