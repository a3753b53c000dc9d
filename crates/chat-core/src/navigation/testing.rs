//! Recording doubles for navigation tests

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use super::{
    Closable, GenericPageModal, MasterPage, Modal, Navigable, Page, PageHost, PageNavigator,
};

/// Shared lifecycle log, entries look like `"a1:attach"`
pub(crate) type Log = Rc<RefCell<Vec<String>>>;

pub(crate) fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

pub(crate) fn entries(log: &Log) -> Vec<String> {
    log.borrow().clone()
}

pub(crate) fn clear(log: &Log) {
    log.borrow_mut().clear();
}

pub(crate) fn parent_of<N: PageNavigator + 'static>(navigator: &Rc<N>) -> Weak<dyn PageNavigator> {
    Rc::downgrade(navigator) as Weak<dyn PageNavigator>
}

pub(crate) fn same_object<A: ?Sized, B: ?Sized>(a: &Rc<A>, b: &Rc<B>) -> bool {
    Rc::as_ptr(a) as *const () == Rc::as_ptr(b) as *const ()
}

/// Page that writes every hook into a log under `label`
pub(crate) struct RecordingPage {
    base: GenericPageModal,
    label: String,
    log: Log,
    closable: bool,
    pub closes: Cell<usize>,
    pub interactions: Cell<usize>,
}

impl RecordingPage {
    pub fn new(id: &str, label: &str, log: &Log) -> Rc<Self> {
        Self::build(id, label, log, false)
    }

    pub fn closable(id: &str, label: &str, log: &Log) -> Rc<Self> {
        Self::build(id, label, log, true)
    }

    fn build(id: &str, label: &str, log: &Log, closable: bool) -> Rc<Self> {
        Rc::new(Self {
            base: GenericPageModal::new(id),
            label: label.to_string(),
            log: Rc::clone(log),
            closable,
            closes: Cell::new(0),
            interactions: Cell::new(0),
        })
    }

    fn record(&self, hook: &str) {
        self.log.borrow_mut().push(format!("{}:{}", self.label, hook));
    }
}

impl Navigable for RecordingPage {
    fn base(&self) -> &GenericPageModal {
        &self.base
    }

    fn on_attached_to_navigator(&self, navigator: Weak<dyn PageNavigator>) {
        self.record("attach");
        self.base.attach(navigator);
    }

    fn as_closable(&self) -> Option<&dyn Closable> {
        if self.closable {
            Some(self)
        } else {
            None
        }
    }
}

impl Page for RecordingPage {
    fn on_navigated_to(&self) {
        self.record("to");
    }

    fn handle_user_interactions(&self) {
        self.interactions.set(self.interactions.get() + 1);
    }

    fn layout(&self, ui: &mut egui::Ui) -> egui::Response {
        ui.label(self.id())
    }

    fn on_navigated_from(&self) {
        self.record("from");
    }
}

impl Closable for RecordingPage {
    fn on_closed(&self) {
        self.closes.set(self.closes.get() + 1);
        self.record("closed");
    }
}

/// Modal that writes every hook into a log under `label`
pub(crate) struct RecordingModal {
    base: GenericPageModal,
    label: String,
    log: Log,
    pub closes: Cell<usize>,
    pub handled: Cell<usize>,
}

impl RecordingModal {
    pub fn new(id: &str, label: &str, log: &Log) -> Rc<Self> {
        Rc::new(Self {
            base: GenericPageModal::new(id),
            label: label.to_string(),
            log: Rc::clone(log),
            closes: Cell::new(0),
            handled: Cell::new(0),
        })
    }

    fn record(&self, hook: &str) {
        self.log.borrow_mut().push(format!("{}:{}", self.label, hook));
    }
}

impl Navigable for RecordingModal {
    fn base(&self) -> &GenericPageModal {
        &self.base
    }

    fn on_attached_to_navigator(&self, navigator: Weak<dyn PageNavigator>) {
        self.record("attach");
        self.base.attach(navigator);
    }

    fn as_closable(&self) -> Option<&dyn Closable> {
        Some(self)
    }
}

impl Modal for RecordingModal {
    fn on_resume(&self) {
        self.record("resume");
    }

    fn handle(&self) {
        self.handled.set(self.handled.get() + 1);
    }

    fn layout(&self, ui: &mut egui::Ui) -> egui::Response {
        ui.label(self.id())
    }

    fn on_dismiss(&self) {
        self.record("dismiss");
    }
}

impl Closable for RecordingModal {
    fn on_closed(&self) {
        self.closes.set(self.closes.get() + 1);
        self.record("closed");
    }
}

/// Page hosting its own sub-stack
pub(crate) struct HostPage {
    host: MasterPage,
    log: Log,
}

impl HostPage {
    pub fn new(id: &str, log: &Log) -> Rc<Self> {
        Rc::new_cyclic(|this: &Weak<HostPage>| Self {
            host: MasterPage::new(id, this.clone()),
            log: Rc::clone(log),
        })
    }

    pub fn sub_stack_ids(&self) -> Vec<String> {
        self.host.sub_pages().ids()
    }
}

impl PageHost for HostPage {
    fn host(&self) -> &MasterPage {
        &self.host
    }
}

impl Navigable for HostPage {
    fn base(&self) -> &GenericPageModal {
        self.host.base()
    }
}

impl Page for HostPage {
    fn on_navigated_to(&self) {
        self.log.borrow_mut().push(format!("{}:to", self.id()));
    }

    fn handle_user_interactions(&self) {
        if let Some(page) = self.current_page() {
            page.handle_user_interactions();
        }
    }

    fn layout(&self, ui: &mut egui::Ui) -> egui::Response {
        ui.label(self.id())
    }

    fn on_navigated_from(&self) {
        self.log.borrow_mut().push(format!("{}:from", self.id()));
    }
}
