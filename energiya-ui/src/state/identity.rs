//! Hosted identity widget
//!
//! When the hosting platform injects its identity widget as
//! `window.netlifyIdentity`, a visitor who logs in is sent to the content
//! editor. Without the widget nothing happens.

use energiya::routes::ADMIN_PATH;
use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const WIDGET_GLOBAL: &str = "netlifyIdentity";

/// Register the `init`/`login` hooks if the widget is present
pub fn init_identity_redirect() {
    let Some((widget, on)) = identity_widget() else {
        return;
    };

    let widget_inner = widget.clone();
    let on_inner = on.clone();
    let on_init = Closure::wrap(Box::new(move |user: JsValue| {
        // Already signed in: stay on the site
        if !(user.is_null() || user.is_undefined()) {
            return;
        }

        let on_login = Closure::wrap(Box::new(move |_: JsValue| {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(ADMIN_PATH) {
                    web_sys::console::error_1(&format!("Redirect to admin failed: {:?}", e).into());
                }
            }
        }) as Box<dyn FnMut(JsValue)>);

        if let Err(e) = on_inner.call2(
            &widget_inner,
            &JsValue::from_str("login"),
            on_login.as_ref().unchecked_ref(),
        ) {
            web_sys::console::error_1(&format!("Identity login hook failed: {:?}", e).into());
        }
        on_login.forget();
    }) as Box<dyn FnMut(JsValue)>);

    if let Err(e) = on.call2(&widget, &JsValue::from_str("init"), on_init.as_ref().unchecked_ref()) {
        web_sys::console::error_1(&format!("Identity init hook failed: {:?}", e).into());
    }
    on_init.forget();
}

/// The widget object and its `on` method, if injected
fn identity_widget() -> Option<(JsValue, Function)> {
    let window = web_sys::window()?;
    let widget = Reflect::get(&window, &JsValue::from_str(WIDGET_GLOBAL)).ok()?;
    if widget.is_null() || widget.is_undefined() {
        return None;
    }

    let on = Reflect::get(&widget, &JsValue::from_str("on"))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;

    Some((widget, on))
}
