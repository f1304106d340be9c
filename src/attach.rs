//! Keep a target's position in sync with its scroll context.
//!
//! [`PositionAttacher::attach`] resolves the target's current scroll offset,
//! hands it to a positioning callback, and then subscribes one debounced
//! recomputation to every trigger that can move the target on screen:
//!
//! - the target's own `update_position` event,
//! - window resize and document scroll,
//! - scroll on each scrollable ancestor found at attach time.
//!
//! The ancestor list is captured once. Subscriptions are never torn down.
//! A target with zero rendered height is treated as closed and is not
//! positioned.

#[cfg(test)]
#[path = "attach_test.rs"]
mod attach_test;

use std::rc::Rc;

use crate::debounce::{Debounced, Scheduler};
use crate::scroll::{Offset, ScrollTree, resolve};

/// Custom event a menu receives when it opens or needs repositioning.
pub const UPDATE_POSITION_EVENT: &str = "update_position";

/// Something that can cause an attached target to move.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Trigger<N> {
    /// `update_position` dispatched on the target itself.
    PositionUpdate(N),
    WindowResize,
    DocumentScroll,
    /// `scroll` on a scrollable ancestor.
    AncestorScroll(N),
}

impl<N> Trigger<N> {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::PositionUpdate(_) => "position-update",
            Self::WindowResize => "window-resize",
            Self::DocumentScroll => "document-scroll",
            Self::AncestorScroll(_) => "ancestor-scroll",
        }
    }
}

/// Registers handlers for triggers. Handlers live for the page lifetime.
pub trait EventSource<N> {
    fn listen(&self, trigger: &Trigger<N>, handler: Rc<dyn Fn()>);
}

/// What a call to [`PositionAttacher::attach`] subscribed.
#[derive(Debug, Clone)]
pub struct Attachment<N> {
    pub target: N,
    pub triggers: Vec<Trigger<N>>,
}

impl<N> Attachment<N> {
    /// Ancestors whose `scroll` events reposition the target.
    pub fn scroll_ancestors(&self) -> impl Iterator<Item = &N> {
        self.triggers.iter().filter_map(|t| match t {
            Trigger::AncestorScroll(node) => Some(node),
            _ => None,
        })
    }
}

/// Binds targets to a positioning callback.
pub struct PositionAttacher<T, S> {
    tree: Rc<T>,
    scheduler: S,
    delay_ms: u32,
}

impl<T, S> PositionAttacher<T, S>
where
    T: ScrollTree + 'static,
    T::Node: 'static,
    S: Scheduler + Clone + 'static,
{
    #[must_use]
    pub fn new(tree: Rc<T>, scheduler: S, delay_ms: u32) -> Self {
        Self { tree, scheduler, delay_ms }
    }

    /// Position `target` now and on every later trigger.
    pub fn attach<E>(&self, target: T::Node, events: &E, place: impl Fn(Offset) + 'static) -> Attachment<T::Node>
    where
        E: EventSource<T::Node> + ?Sized,
    {
        let place: Rc<dyn Fn(Offset)> = Rc::new(place);
        let initial = resolve(&*self.tree, &target);
        if is_visible(&*self.tree, &target) {
            place(initial.offset);
        } else {
            log::debug!("attach: target hidden, skipping initial placement");
        }

        let recompute = {
            let tree = Rc::clone(&self.tree);
            let target = target.clone();
            Debounced::new(self.scheduler.clone(), self.delay_ms, move |trigger: Trigger<T::Node>| {
                if !is_visible(&*tree, &target) {
                    log::trace!("attach: {} ignored, target hidden", trigger.name());
                    return;
                }
                let current = resolve(&*tree, &target);
                log::trace!("attach: {} -> ({}, {})", trigger.name(), current.offset.x, current.offset.y);
                place(current.offset);
            })
        };

        let mut triggers = vec![
            Trigger::PositionUpdate(target.clone()),
            Trigger::WindowResize,
            Trigger::DocumentScroll,
        ];
        triggers.extend(initial.ancestors.into_iter().map(Trigger::AncestorScroll));

        for trigger in &triggers {
            let recompute = recompute.clone();
            let fired = trigger.clone();
            events.listen(trigger, Rc::new(move || recompute.call(fired.clone())));
        }

        log::debug!("attach: subscribed {} triggers", triggers.len());
        Attachment { target, triggers }
    }
}

fn is_visible<T: ScrollTree + ?Sized>(tree: &T, node: &T::Node) -> bool {
    tree.rendered_height(node) > 0.0
}
