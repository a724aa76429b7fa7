//! DOM mounting for `wasm32`.

use super::{DomNode, ToggleHost};
use neumorph_widgets::NeumorphicToggle;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent, MouseEvent};

/// A toggle living in the page.
///
/// Dropping it removes the listeners' closures; keep it alive as long as the
/// element is shown.
pub struct MountedToggle {
    element: Element,
    host: Rc<ToggleHost>,
    _click: Closure<dyn FnMut(MouseEvent)>,
    _keydown: Closure<dyn FnMut(KeyboardEvent)>,
}

impl MountedToggle {
    /// Root element of the toggle.
    #[must_use]
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Current value.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.host.is_on()
    }

    /// Push a new caller-owned value and redraw.
    ///
    /// Safe to call from the toggle's own change callback.
    ///
    /// # Errors
    ///
    /// Fails if the value would change the toggle's ownership mode, or if the
    /// DOM rejects the update.
    pub fn set_state(&self, on: Option<bool>) -> Result<(), JsValue> {
        self.host
            .set_state(on)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        refresh(&self.element, &self.host.render())
    }

    /// Enable or disable the toggle and redraw.
    ///
    /// # Errors
    ///
    /// Fails if the DOM rejects the update.
    pub fn set_disabled(&self, disabled: bool) -> Result<(), JsValue> {
        self.host.set_disabled(disabled);
        refresh(&self.element, &self.host.render())
    }
}

/// Build the toggle's elements under `parent` and attach its listeners.
///
/// # Errors
///
/// Fails if `parent` is detached from a document or the DOM rejects an
/// operation.
pub fn mount(parent: &Element, toggle: NeumorphicToggle) -> Result<MountedToggle, JsValue> {
    console_error_panic_hook::set_once();

    let document = parent
        .owner_document()
        .ok_or_else(|| JsValue::from_str("parent element has no document"))?;
    let element = document.create_element("div")?;
    let host = Rc::new(ToggleHost::new(toggle));
    refresh(&element, &host.render())?;
    parent.append_child(&element)?;

    let click = {
        let element = element.clone();
        let host = Rc::clone(&host);
        Closure::new(move |_e: MouseEvent| {
            if host.click().is_some() {
                redraw(&element, &host);
            }
        })
    };
    element.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;

    let keydown = {
        let element = element.clone();
        let host = Rc::clone(&host);
        Closure::new(move |e: KeyboardEvent| {
            let outcome = host.key_down(&e.key());
            if outcome.prevent_default {
                e.prevent_default();
            }
            if outcome.changed.is_some() {
                redraw(&element, &host);
            }
        })
    };
    element.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;

    Ok(MountedToggle {
        element,
        host,
        _click: click,
        _keydown: keydown,
    })
}

fn redraw(element: &Element, host: &ToggleHost) {
    if let Err(err) = refresh(element, &host.render()) {
        log::warn!("failed to redraw toggle: {err:?}");
    }
}

/// Rewrite the root's attributes and rebuild its children from `node`.
fn refresh(element: &Element, node: &DomNode) -> Result<(), JsValue> {
    for (name, value) in &node.attributes {
        element.set_attribute(name, value)?;
    }
    if node.attribute("data-testid").is_none() {
        element.remove_attribute("data-testid")?;
    }

    element.set_inner_html("");
    let document = element
        .owner_document()
        .ok_or_else(|| JsValue::from_str("toggle element has no document"))?;
    for child in &node.children {
        element.append_child(&build(&document, child)?)?;
    }
    Ok(())
}

fn build(document: &Document, node: &DomNode) -> Result<Element, JsValue> {
    let element = document.create_element(node.tag)?;
    for (name, value) in &node.attributes {
        element.set_attribute(name, value)?;
    }
    if let Some(text) = node.text {
        element.set_text_content(Some(text));
    }
    for child in &node.children {
        element.append_child(&build(document, child)?)?;
    }
    Ok(element)
}
