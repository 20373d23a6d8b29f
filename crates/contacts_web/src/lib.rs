//! Browser entry point for the contacts page.
//!
//! # Responsibility
//! - Mount `contacts_core` onto the page's `#root` element.
//! - Forward clicks to the controller through one delegated listener.
//!
//! # Invariants
//! - Startup failures are returned to JavaScript as thrown `Error`s.
//! - The controller is borrowed mutably only for the span of one dispatch.

mod document;

pub use document::WebDocument;

use contacts_core::{
    Action, AppConfig, AppError, ContactsApp, ACTION_ATTRIBUTE, CONTACT_ID_ATTRIBUTE,
};
use log::{debug, error, info, warn};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, Node};

type SharedApp = Rc<RefCell<ContactsApp<WebDocument>>>;

/// Page startup, run automatically once the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        // Another module on the page already owns the global logger.
        debug!("event=logger_init module=web status=skipped reason={err}");
    }

    let document = WebDocument::from_window().map_err(|err| to_js_error(&AppError::from(err)))?;
    let app = ContactsApp::mount(document, AppConfig::default()).map_err(|err| {
        error!("event=app_start module=web status=error reason={err}");
        to_js_error(&err)
    })?;

    let app_root = app.view().app.clone();
    install_click_delegate(&app_root, Rc::new(RefCell::new(app)))?;
    info!("event=app_start module=web status=ok");
    Ok(())
}

fn install_click_delegate(app_root: &Node, app: SharedApp) -> Result<(), JsValue> {
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(action) = action_from_event(&event) else {
            return;
        };
        match app.borrow_mut().dispatch(action) {
            Ok(outcome) => debug!("event=click_dispatched module=web status=ok outcome={outcome:?}"),
            Err(err) => error!("event=click_dispatched module=web status=error reason={err}"),
        }
    });
    app_root.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    // Lives as long as the page.
    handler.forget();
    Ok(())
}

fn action_from_event(event: &Event) -> Option<Action> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let trigger = target
        .closest(&format!("[{ACTION_ATTRIBUTE}]"))
        .ok()
        .flatten()?;
    let name = trigger.get_attribute(ACTION_ATTRIBUTE)?;
    let contact_id = trigger.get_attribute(CONTACT_ID_ATTRIBUTE);
    match Action::decode(&name, contact_id.as_deref()) {
        Ok(action) => Some(action),
        Err(err) => {
            warn!("event=click_dropped module=web status=error reason={err}");
            None
        }
    }
}

fn to_js_error(err: &AppError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}
