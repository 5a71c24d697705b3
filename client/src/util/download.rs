//! Browser file download for spreadsheet export.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the blob/object-URL/anchor-click dance behind one call so screens
//! only deal with bytes and a filename. SSR paths return an error since there
//! is no browser to save into.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use chrono::NaiveDate;

/// Offer `bytes` to the user as a file named `filename`.
///
/// # Errors
///
/// Returns an error string if the blob, object URL, or anchor element cannot
/// be created.
pub fn save_file(filename: &str, mime: &str, bytes: &[u8]) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let js_err = |e: wasm_bindgen::JsValue| format!("{e:?}");

        let array = js_sys::Uint8Array::from(bytes);
        let parts = js_sys::Array::new();
        parts.push(&array);
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "no document".to_owned())?;
        let anchor = document
            .create_element("a")
            .map_err(js_err)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "anchor element unavailable".to_owned())?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        let body = document.body().ok_or_else(|| "no document body".to_owned())?;
        body.append_child(&anchor).map_err(js_err)?;
        anchor.click();
        anchor.remove();

        // Revoking in the same tick can cancel the download in some browsers.
        leptos::prelude::set_timeout(
            move || {
                let _ = web_sys::Url::revoke_object_url(&url);
            },
            std::time::Duration::ZERO,
        );
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, mime, bytes);
        Err("not available on server".to_owned())
    }
}

/// Today's date in the browser's local time zone.
pub fn today() -> Option<NaiveDate> {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let year = i32::try_from(now.get_full_year()).ok()?;
        NaiveDate::from_ymd_opt(year, now.get_month() + 1, now.get_date())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
