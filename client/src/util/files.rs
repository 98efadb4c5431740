//! Reading picked files from `<input type="file">` change events.
//!
//! Only names and sizes are read; file contents never leave the browser.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use classroom::FileRef;

/// Files selected by the input that fired `ev`, in picker order.
pub fn picked_files(ev: &leptos::ev::Event) -> Vec<FileRef> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return Vec::new();
        };
        let Some(list) = input.files() else {
            return Vec::new();
        };
        let picked = (0..list.length())
            .filter_map(|i| list.get(i))
            .map(|file| FileRef::new(file.name(), byte_count(file.size())))
            .collect();
        // Clear so re-picking the same file fires another change event.
        input.set_value("");
        picked
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        Vec::new()
    }
}

/// Browser file sizes arrive as `f64`.
#[cfg(any(test, feature = "hydrate"))]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn byte_count(size: f64) -> u64 {
    if size.is_finite() && size > 0.0 { size as u64 } else { 0 }
}
