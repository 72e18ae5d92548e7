use crate::constants::{REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD};
use crate::dom;
use crate::toggles::RevealStyle;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn apply(style: &RevealStyle, el: &web::HtmlElement) {
    dom::set_style(el, "opacity", style.opacity);
    dom::set_style(el, "transform", style.transform);
}

/// Fade cards in the first time they intersect the viewport.
pub fn wire_reveal(document: &web::Document) -> anyhow::Result<()> {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: JsValue| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            if let Ok(el) = entry.target().dyn_into::<web::HtmlElement>() {
                apply(&RevealStyle::SHOWN, &el);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, JsValue)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    callback.forget();

    let mut observed = 0usize;
    for el in dom::query_all(document, REVEAL_SELECTOR) {
        let Ok(html) = el.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        apply(&RevealStyle::HIDDEN, &html);
        dom::set_style(&html, "transition", RevealStyle::TRANSITION);
        observer.observe(&html);
        observed += 1;
    }
    log::info!("[reveal] observing {} elements", observed);
    Ok(())
}
