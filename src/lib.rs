#![cfg(target_arch = "wasm32")]
use crate::config::ParticleConfig;
use crate::field::ParticleField;
use crate::random::SeededRandom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
mod config;
mod constants;
mod countdown;
mod dom;
mod events;
mod field;
mod frame;
mod navigation;
mod orb;
mod random;
mod sparkle;
mod surface;
mod toggles;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("event page starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Page behaviors are independent of the canvas; wire them first so a
    // missing canvas does not take the navigation down with it.
    events::wire_navigation(&document);
    events::wire_section_toggles(&document);
    if let Err(e) = events::wire_reveal(&document) {
        log::warn!("[reveal] disabled: {:?}", e);
    }
    if let Err(e) = events::wire_countdown(&document) {
        log::warn!("[countdown] disabled: {:?}", e);
    }

    start_particles(&document)
}

fn start_particles(document: &web::Document) -> anyhow::Result<()> {
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let surface = canvas::CanvasSurface::from_canvas(&canvas)?;

    let (width, height) = dom::sync_canvas_to_viewport(&canvas);
    let field = Rc::new(RefCell::new(ParticleField::new(
        ParticleConfig::default(),
        SeededRandom::from_entropy(),
        width,
        height,
    )));
    log::info!(
        "[particles] {}x{} canvas, {} orbs",
        width,
        height,
        field.borrow().orbs().len()
    );

    events::wire_particle_input(document, &canvas, &field);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        surface,
        frames: 0,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
