//! Landing page shown before anything else is picked

use std::rc::Rc;

use super::LabelPage;

pub const PAGE_ID: &str = "start";

pub fn new_page() -> Rc<LabelPage> {
    Rc::new(LabelPage::new(PAGE_ID, "start page"))
}
