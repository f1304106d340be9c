//! In-memory stand-ins for the browser: a manual clock, a synthetic element
//! tree, and an event bus that records subscriptions.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::attach::{EventSource, Trigger};
use crate::debounce::Scheduler;
use crate::scroll::{Offset, Overflow, ScrollTree};

// =============================================================
// Manual scheduler
// =============================================================

struct Task {
    due_ms: u64,
    seq: u64,
    cancelled: Rc<Cell<bool>>,
    run: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Clock {
    now_ms: Cell<u64>,
    next_seq: Cell<u64>,
    tasks: RefCell<Vec<Task>>,
}

/// Scheduler driven by [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<Clock>,
}

pub struct ManualHandle {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
        let cancelled = Rc::new(Cell::new(false));
        let seq = self.clock.next_seq.get();
        self.clock.next_seq.set(seq + 1);
        self.clock.tasks.borrow_mut().push(Task {
            due_ms: self.clock.now_ms.get() + u64::from(delay_ms),
            seq,
            cancelled: Rc::clone(&cancelled),
            run: task,
        });
        ManualHandle { cancelled }
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward, running every live task that comes due.
    pub fn advance(&self, ms: u64) {
        let target = self.clock.now_ms.get() + ms;
        loop {
            let next = {
                let mut tasks = self.clock.tasks.borrow_mut();
                tasks.retain(|t| !t.cancelled.get());
                let idx = tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due_ms <= target)
                    .min_by_key(|(_, t)| (t.due_ms, t.seq))
                    .map(|(i, _)| i);
                idx.map(|i| tasks.remove(i))
            };
            let Some(task) = next else {
                break;
            };
            self.clock.now_ms.set(task.due_ms);
            (task.run)();
        }
        self.clock.now_ms.set(target);
    }

    /// Number of scheduled tasks that have neither run nor been cancelled.
    pub fn pending(&self) -> usize {
        self.clock.tasks.borrow().iter().filter(|t| !t.cancelled.get()).count()
    }
}

// =============================================================
// Synthetic element tree
// =============================================================

#[derive(Clone, Debug)]
struct FakeNode {
    parent: Option<usize>,
    overflow: (Overflow, Overflow),
    scroll: Offset,
    height: f64,
    root: bool,
}

/// Element tree addressed by index. Node 0 is `<html>`, node 1 is `<body>`.
pub struct FakeTree {
    nodes: RefCell<Vec<FakeNode>>,
}

pub const HTML: usize = 0;
pub const BODY: usize = 1;

impl FakeTree {
    pub fn new() -> Self {
        let html = FakeNode {
            parent: None,
            overflow: (Overflow::Visible, Overflow::Visible),
            scroll: Offset::default(),
            height: 800.0,
            root: true,
        };
        let body = FakeNode { parent: Some(HTML), ..html.clone() };
        Self { nodes: RefCell::new(vec![html, body]) }
    }

    /// Append a plain, visible element under `parent`.
    pub fn add(&self, parent: usize) -> usize {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(FakeNode {
            parent: Some(parent),
            overflow: (Overflow::Visible, Overflow::Visible),
            scroll: Offset::default(),
            height: 20.0,
            root: false,
        });
        nodes.len() - 1
    }

    pub fn set_overflow(&self, node: usize, x: Overflow, y: Overflow) {
        self.nodes.borrow_mut()[node].overflow = (x, y);
    }

    pub fn set_scroll(&self, node: usize, x: f64, y: f64) {
        self.nodes.borrow_mut()[node].scroll = Offset::new(x, y);
    }

    pub fn set_height(&self, node: usize, height: f64) {
        self.nodes.borrow_mut()[node].height = height;
    }
}

impl ScrollTree for FakeTree {
    type Node = usize;

    fn parent_element(&self, node: &usize) -> Option<usize> {
        self.nodes.borrow()[*node].parent
    }

    fn overflow(&self, node: &usize) -> (Overflow, Overflow) {
        self.nodes.borrow()[*node].overflow
    }

    fn scroll_position(&self, node: &usize) -> Offset {
        self.nodes.borrow()[*node].scroll
    }

    fn is_document_root(&self, node: &usize) -> bool {
        self.nodes.borrow()[*node].root
    }

    fn rendered_height(&self, node: &usize) -> f64 {
        self.nodes.borrow()[*node].height
    }
}

// =============================================================
// Recording event bus
// =============================================================

/// Event source that keeps every handler so tests can fire triggers.
#[derive(Default)]
pub struct FakeEvents {
    handlers: RefCell<HashMap<Trigger<usize>, Vec<Rc<dyn Fn()>>>>,
}

impl FakeEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invoke every handler registered for `trigger`; returns how many ran.
    pub fn fire(&self, trigger: &Trigger<usize>) -> usize {
        let handlers = self.handlers.borrow().get(trigger).cloned().unwrap_or_default();
        for handler in &handlers {
            handler();
        }
        handlers.len()
    }

    pub fn listener_count(&self) -> usize {
        self.handlers.borrow().values().map(Vec::len).sum()
    }
}

impl EventSource<usize> for FakeEvents {
    fn listen(&self, trigger: &Trigger<usize>, handler: Rc<dyn Fn()>) {
        self.handlers.borrow_mut().entry(trigger.clone()).or_default().push(handler);
    }
}
