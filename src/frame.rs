use crate::canvas::CanvasSurface;
use crate::field::ParticleField;
use crate::random::SeededRandom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedField = Rc<RefCell<ParticleField<SeededRandom>>>;

pub struct FrameContext {
    pub field: SharedField,
    pub surface: CanvasSurface,
    pub frames: u64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let summary = self.field.borrow_mut().frame(&mut self.surface);
        self.frames += 1;
        if summary.sparkles_truncated > 0 {
            log::debug!(
                "[particles] frame {} dropped {} oldest sparkles",
                self.frames,
                summary.sparkles_truncated
            );
        }
        log::trace!("[particles] frame {} {:?}", self.frames, summary);
    }
}

/// Drive `frame_ctx` from `requestAnimationFrame` for the page's lifetime.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if w.request_animation_frame(cb.as_ref().unchecked_ref()).is_err() {
            log::error!("[particles] requestAnimationFrame rejected; loop stopped");
        }
    }
}
