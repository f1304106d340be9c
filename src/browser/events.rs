//! DOM event listeners.
//!
//! Listeners registered here are never removed: the closures are leaked with
//! `Closure::forget` and live until the page unloads.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, Window};

use crate::attach::{EventSource, Trigger, UPDATE_POSITION_EVENT};
use crate::error::UiError;

/// Add a permanent listener for `event` on `target`.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), UiError> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Add a listener that the browser removes after its first call.
pub fn listen_once(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), UiError> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &options,
    )?;
    cb.forget();
    Ok(())
}

/// Fire a bare custom event on `target`.
pub fn dispatch(target: &EventTarget, event: &str) -> Result<(), UiError> {
    let event = web_sys::CustomEvent::new(event)?;
    target.dispatch_event(&event)?;
    Ok(())
}

/// Maps attacher triggers onto window, document, and element events.
#[derive(Clone)]
pub struct DomEvents {
    window: Window,
    document: Document,
}

impl DomEvents {
    #[must_use]
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }
}

impl EventSource<Element> for DomEvents {
    fn listen(&self, trigger: &Trigger<Element>, handler: Rc<dyn Fn()>) {
        let (target, event): (&EventTarget, &str) = match trigger {
            Trigger::PositionUpdate(el) => (el.as_ref(), UPDATE_POSITION_EVENT),
            Trigger::WindowResize => (self.window.as_ref(), "resize"),
            Trigger::DocumentScroll => (self.document.as_ref(), "scroll"),
            Trigger::AncestorScroll(el) => (el.as_ref(), "scroll"),
        };
        if let Err(e) = listen(target, event, move |_| handler()) {
            log::warn!("failed to listen for {}: {e}", trigger.name());
        }
    }
}
