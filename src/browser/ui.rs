//! Page wiring: finds the theme's markup and attaches every behavior.
//!
//! Each feature is independent. A feature whose markup is absent does
//! nothing; one that fails is logged and the rest still run.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::alerts::{self, DismissedAlerts};
use crate::attach::{PositionAttacher, UPDATE_POSITION_EVENT};
use crate::browser::bootstrap;
use crate::browser::dom::{DomTree, elements, query_all, rendered_height, set_style};
use crate::browser::events::{DomEvents, dispatch, listen, listen_once};
use crate::browser::timer::TimeoutScheduler;
use crate::config::UiConfig;
use crate::debounce::Debounced;
use crate::dropdown::{self, DropdownFlags, DropdownState};
use crate::error::UiError;
use crate::prefs::PreferenceStore;
use crate::sidebar::{self, SidebarLayout};
use crate::theme::{self, Theme};
use crate::widgets::{self, Component};

/// Theme behaviors bound to one document.
#[derive(Clone)]
pub struct AdminUi {
    window: Window,
    document: Document,
    config: UiConfig,
    store: Rc<dyn PreferenceStore>,
    tree: Rc<DomTree>,
    events: DomEvents,
}

impl AdminUi {
    #[must_use]
    pub fn new(window: Window, document: Document, config: UiConfig, store: Rc<dyn PreferenceStore>) -> Self {
        let tree = Rc::new(DomTree::new(window.clone(), document.clone()));
        let events = DomEvents::new(window.clone(), document.clone());
        Self { window, document, config, store, tree, events }
    }

    /// Run every feature in page order.
    pub fn init(&self) {
        report("viewport unit", self.set_mobile_size());
        report("minimenu", self.minimenu());
        report("tooltips", self.tooltips());
        report("responsive", self.responsive());
        report("dismissible alerts", self.dismissible_alerts());
        report("toasts", self.toasts());
        report("sidebar layout", self.toggle_sidebar(self.inner_width()).map(drop));
        report("dropdowns", self.simple_dropdowns());
        report("dark mode", self.dark_mode());
        log::debug!("admin ui initialized");
    }

    // --- Document access ---

    fn body(&self) -> Result<HtmlElement, UiError> {
        self.document.body().ok_or(UiError::MissingDocument)
    }

    fn root(&self) -> Result<Element, UiError> {
        self.document.document_element().ok_or(UiError::MissingDocument)
    }

    fn query_one(&self, selector: &str) -> Result<Option<Element>, UiError> {
        Ok(self.document.query_selector(selector)?)
    }

    fn inner_width(&self) -> f64 {
        self.window.inner_width().map_or(0.0, |w| w.as_f64().unwrap_or(0.0))
    }

    fn blur_active(&self) -> Result<(), UiError> {
        if let Some(active) = self.document.active_element().and_then(|el| el.dyn_ref::<HtmlElement>().cloned()) {
            active.blur()?;
        }
        Ok(())
    }

    // --- Sidebar ---

    /// Set `--vh` to 1% of the real viewport height.
    pub fn set_mobile_size(&self) -> Result<(), UiError> {
        let height = self.window.inner_height()?.as_f64().unwrap_or(0.0);
        set_style(&self.root()?, sidebar::VIEWPORT_UNIT_PROPERTY, &sidebar::viewport_unit(height))
    }

    /// Restore the collapsed sidebar and wire its toggles.
    pub fn minimenu(&self) -> Result<(), UiError> {
        let classes = self.body()?.class_list();
        if sidebar::minimenu_preferred(&*self.store) && !classes.contains(sidebar::MINIMENU_CLASS) {
            classes.add_1(sidebar::MINIMENU_CLASS)?;
        }

        for toggle in query_all(&self.document, sidebar::TOGGLE_SELECTOR)? {
            let ui = self.clone();
            listen(&toggle, "click", move |ev| {
                ev.prevent_default();
                report("minimenu toggle", ui.toggle_minimenu());
            })?;
        }
        Ok(())
    }

    fn toggle_minimenu(&self) -> Result<(), UiError> {
        let collapsed = self.body()?.class_list().toggle(sidebar::MINIMENU_CLASS)?;
        sidebar::persist_minimenu(&*self.store, collapsed)?;
        if !collapsed
            && let Some(cta) = self
                .query_one(sidebar::CTA_SELECTOR)?
                .and_then(|el| el.dyn_ref::<HtmlElement>().cloned())
        {
            cta.style().set_css_text("");
        }
        self.blur_active()
    }

    /// Dock or offcanvas the sidebar for `width`. Returns the offcanvas
    /// instance when one was created.
    pub fn toggle_sidebar(&self, width: f64) -> Result<Option<JsValue>, UiError> {
        let Some(sidebar_el) = self.query_one(sidebar::SIDEBAR_SELECTOR)? else {
            return Ok(None);
        };
        match SidebarLayout::for_width(width, self.config.mobile_size) {
            SidebarLayout::Docked => {
                set_style(&sidebar_el, "visibility", "visible")?;
                sidebar_el.class_list().remove_1(sidebar::OFFCANVAS_CLASS)?;
                Ok(None)
            }
            SidebarLayout::Offcanvas => {
                sidebar_el.class_list().add_1(sidebar::OFFCANVAS_CLASS)?;
                let ctor = bootstrap::component(&self.window, Component::Offcanvas)
                    .ok_or_else(|| UiError::Js("bootstrap Offcanvas not loaded".into()))?;
                Ok(Some(bootstrap::get_or_create_instance(&ctor, &sidebar_el)?))
            }
        }
    }

    /// Re-run the sidebar layout and `--vh` after resizing settles.
    pub fn responsive(&self) -> Result<(), UiError> {
        let ui = self.clone();
        let on_resize = Debounced::new(TimeoutScheduler, self.config.debounce_ms, move |()| {
            report("sidebar layout", ui.toggle_sidebar(ui.inner_width()).map(drop));
            report("viewport unit", ui.set_mobile_size());
        });
        listen(&self.window, "resize", move |_| on_resize.call(()))
    }

    // --- Alerts ---

    /// Hide alerts closed on earlier visits and remember new closes.
    pub fn dismissible_alerts(&self) -> Result<(), UiError> {
        let dismissed = DismissedAlerts::load(&*self.store);
        for alert in query_all(&self.document, alerts::ALERT_SELECTOR)? {
            let id = alert.id();
            if dismissed.contains(&id) {
                set_style(&alert, "display", "none")?;
            }
            let store = Rc::clone(&self.store);
            listen_once(&alert, alerts::CLOSED_EVENT, move |_| {
                report("dismiss alert", DismissedAlerts::dismiss(&*store, &id).map(drop));
            })?;
        }
        Ok(())
    }

    // --- Bootstrap widgets ---

    /// Create tooltips for `[data-bs-toggle="tooltip"]`, titling them from
    /// their text when they have no `title`.
    pub fn tooltips(&self) -> Result<(), UiError> {
        let Some(ctor) = bootstrap::component(&self.window, Component::Tooltip) else {
            log::debug!("bootstrap Tooltip not loaded");
            return Ok(());
        };
        for el in query_all(&self.document, widgets::TOOLTIP_SELECTOR)? {
            let text = el.dyn_ref::<HtmlElement>().map(HtmlElement::inner_text).unwrap_or_default();
            if let Some(title) = widgets::fallback_title(el.get_attribute("title").as_deref(), &text) {
                el.set_attribute("title", &title)?;
            }
            bootstrap::get_or_create_instance(&ctor, &el)?;
        }
        Ok(())
    }

    /// Show toasts rendered in the page.
    pub fn toasts(&self) -> Result<(), UiError> {
        let toasts = query_all(&self.document, widgets::TOAST_SELECTOR)?;
        if toasts.is_empty() {
            return Ok(());
        }
        let ctor = bootstrap::component(&self.window, Component::Toast)
            .ok_or_else(|| UiError::Js("bootstrap Toast not loaded".into()))?;
        for el in toasts {
            let toast = bootstrap::get_or_create_instance(&ctor, &el)?;
            bootstrap::call_method(&toast, "show", None)?;
        }
        Ok(())
    }

    // --- Dropdowns ---

    /// Wire `.dropdown-toggle` triggers Bootstrap does not handle, and
    /// `.dropdown-alias` secondary triggers.
    pub fn simple_dropdowns(&self) -> Result<(), UiError> {
        let attacher = PositionAttacher::new(Rc::clone(&self.tree), TimeoutScheduler, self.config.debounce_ms);
        for trigger in query_all(&self.document, dropdown::TOGGLE_SELECTOR)? {
            report("dropdown", self.wire_dropdown(&trigger, &attacher));
        }

        for alias in query_all(&self.document, dropdown::ALIAS_SELECTOR)? {
            let Some(menu) = sibling_menu(&alias)? else {
                continue;
            };
            listen(&alias, "click", move |_| {
                let toggled = menu.class_list().toggle(dropdown::SHOW_CLASS);
                report("dropdown alias", toggled.map(drop).map_err(UiError::from));
            })?;
        }
        Ok(())
    }

    fn wire_dropdown(
        &self,
        trigger: &Element,
        attacher: &PositionAttacher<DomTree, TimeoutScheduler>,
    ) -> Result<(), UiError> {
        let (Some(parent), Some(menu)) = (trigger.parent_element(), sibling_menu(trigger)?) else {
            log::debug!("dropdown trigger without menu");
            return Ok(());
        };
        let menu_classes = menu.class_list();
        let flags = DropdownFlags {
            dropup: parent.class_list().contains(dropdown::DROPUP_CLASS),
            fixed: menu_classes.contains(dropdown::FIXED_CLASS),
        };
        let state = Rc::new(RefCell::new(DropdownState::new(flags, menu_classes.contains(dropdown::SHOW_CLASS))));
        trigger.set_attribute("aria-expanded", state.borrow().aria_expanded())?;

        {
            let ui = self.clone();
            let (trigger_el, menu_el, state) = (trigger.clone(), menu.clone(), Rc::clone(&state));
            listen(trigger, "click", move |_| {
                report("dropdown click", ui.dropdown_click(&trigger_el, &menu_el, &state));
            })?;
        }
        {
            let (menu_el, state) = (menu.clone(), Rc::clone(&state));
            listen(trigger, "blur", move |_| {
                state.borrow_mut().close();
                report("dropdown blur", menu_el.class_list().remove_1(dropdown::SHOW_CLASS).map_err(UiError::from));
            })?;
        }

        if flags.fixed {
            let (trigger_el, menu_el) = (trigger.clone(), menu.clone());
            attacher.attach(menu, &self.events, move |offset| {
                let transform = state.borrow().fixed_transform(rendered_height(&trigger_el), offset);
                report("dropdown position", set_style(&menu_el, "transform", &transform));
            });
        }
        Ok(())
    }

    fn dropdown_click(&self, trigger: &Element, menu: &Element, state: &RefCell<DropdownState>) -> Result<(), UiError> {
        let effects = {
            let mut state = state.borrow_mut();
            // Alias triggers toggle the class directly; start from the DOM.
            state.open = menu.class_list().contains(dropdown::SHOW_CLASS);
            state.click(rendered_height(trigger))
        };

        menu.class_list().toggle_with_force(dropdown::SHOW_CLASS, effects.open)?;
        trigger.set_attribute("aria-expanded", effects.aria_expanded)?;
        if let Some(transform) = &effects.transform {
            set_style(menu, "transform", transform)?;
        }
        if effects.blur {
            self.blur_active()?;
        }
        if effects.request_position {
            dispatch(menu, UPDATE_POSITION_EVENT)?;
        }
        Ok(())
    }

    // --- Dark mode ---

    /// Apply the stored theme and wire `#toggle-dark-mode`.
    pub fn dark_mode(&self) -> Result<(), UiError> {
        let current = Theme::load(&*self.store);
        self.root()?.set_attribute(theme::THEME_ATTRIBUTE, current.as_str())?;

        let Some(toggle) = self.query_one(theme::TOGGLE_SELECTOR)? else {
            return Ok(());
        };
        show_theme_options(&toggle, &current)?;

        let ui = self.clone();
        let toggle_el = toggle.clone();
        listen(&toggle, "click", move |ev| {
            ev.prevent_default();
            report("dark mode toggle", ui.toggle_theme(&toggle_el));
        })
    }

    fn toggle_theme(&self, toggle: &Element) -> Result<(), UiError> {
        let root = self.root()?;
        let next = Theme::parse(&root.get_attribute(theme::THEME_ATTRIBUTE).unwrap_or_default()).toggled();
        show_theme_options(toggle, &next)?;
        next.persist(&*self.store)?;
        root.set_attribute(theme::THEME_ATTRIBUTE, next.as_str())?;
        Ok(())
    }
}

/// The `.dropdown-menu` inside `trigger`'s parent.
fn sibling_menu(trigger: &Element) -> Result<Option<Element>, UiError> {
    match trigger.parent_element() {
        Some(parent) => Ok(parent.query_selector(dropdown::MENU_SELECTOR)?),
        None => Ok(None),
    }
}

fn show_theme_options(toggle: &Element, mode: &Theme) -> Result<(), UiError> {
    for option in elements(&toggle.query_selector_all(theme::OPTION_SELECTOR)?) {
        if mode.shows_option(&option.get_attribute("value").unwrap_or_default()) {
            option.remove_attribute("hidden")?;
        } else {
            option.set_attribute("hidden", "")?;
        }
    }
    Ok(())
}

fn report(feature: &str, result: Result<(), UiError>) {
    if let Err(e) = result {
        log::warn!("{feature}: {e}");
    }
}
