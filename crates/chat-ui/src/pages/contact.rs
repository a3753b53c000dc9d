//! Contact list

use std::rc::Rc;

use super::LabelPage;

pub const PAGE_ID: &str = "contact";

pub fn new_page() -> Rc<LabelPage> {
    Rc::new(LabelPage::new(PAGE_ID, "通讯录"))
}
