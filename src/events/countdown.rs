use crate::constants::*;
use crate::countdown::Countdown;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn render(document: &web::Document, countdown: &Countdown) {
    for (id, text) in COUNTDOWN_FIELD_IDS.iter().zip(countdown.fields()) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(&text));
        }
    }
    if countdown.is_finished() {
        if let Some(title) = dom::query_html(document, COUNTDOWN_TITLE_SELECTOR) {
            title.set_text_content(Some(COUNTDOWN_FINISHED_TITLE));
        }
    }
}

fn tick(document: &web::Document) {
    let countdown = Countdown::until(COUNTDOWN_TARGET_MS, js_sys::Date::now());
    render(document, &countdown);
}

/// Render the countdown now and then once per second.
pub fn wire_countdown(document: &web::Document) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    tick(document);
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || tick(&doc)) as Box<dyn FnMut()>);
    window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            COUNTDOWN_TICK_MS,
        )
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    closure.forget();
    Ok(())
}
