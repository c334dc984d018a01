use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlTextAreaElement, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Copy text to the clipboard through a transient off-screen textarea.
///
/// # Errors
/// Returns an error if the textarea cannot be created or the copy command
/// is rejected by the browser.
pub fn copy_text(text: &str) -> Result<(), String> {
    let document = document();
    let textarea = document
        .create_element("textarea")
        .map_err(|_| "Failed to create textarea".to_string())?
        .dyn_into::<HtmlTextAreaElement>()
        .map_err(|_| "Failed to cast to textarea".to_string())?;

    textarea.set_value(text);

    if let Ok(style) = js_sys::Reflect::get(&textarea, &"style".into()) {
        let _ = js_sys::Reflect::set(&style, &"position".into(), &"fixed".into());
        let _ = js_sys::Reflect::set(&style, &"top".into(), &"-1000px".into());
        let _ = js_sys::Reflect::set(&style, &"left".into(), &"-1000px".into());
    }

    let body = document.body().ok_or_else(|| "No body element".to_string())?;
    body.append_child(&textarea)
        .map_err(|_| "Failed to append textarea".to_string())?;
    textarea.select();
    let copied = document
        .unchecked_ref::<web_sys::HtmlDocument>()
        .exec_command("copy")
        .unwrap_or(false);
    body.remove_child(&textarea)
        .map_err(|_| "Failed to remove textarea".to_string())?;
    if copied {
        Ok(())
    } else {
        Err("Copy command rejected".to_string())
    }
}

/// Open a URL in a new tab, ignoring popup-blocker refusals.
pub fn open_in_new_tab(url: &str) {
    if let Err(err) = window().open_with_url_and_target(url, "_blank") {
        log::error!("failed to open {url}: {err:?}");
    }
}
