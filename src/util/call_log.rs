use std::cell::RefCell;
use std::rc::Rc;

/// Records the order in which a callback saw each index. Clones share the same log, so a clone can
/// be moved into a closure while the original is inspected afterwards.
#[derive(Debug, Clone, Default)]
pub struct CallLog(pub Rc<RefCell<Vec<usize>>>);

impl CallLog {
    pub fn new() -> CallLog {
        CallLog::default()
    }

    pub fn record(&self, index: usize) {
        self.0.borrow_mut().push(index);
    }

    pub fn calls(&self) -> usize {
        self.0.borrow().len()
    }

    /// Takes the recorded indices, leaving the log empty.
    pub fn take(&self) -> Vec<usize> {
        self.0.take()
    }
}
