use crate::dom;
use crate::frame::SharedField;
use glam::DVec2;
use web_sys as web;

/// Document-level mouse input feeding the sparkle field, plus the viewport
/// resize that keeps the canvas full-screen.
pub fn wire_particle_input(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    field: &SharedField,
) {
    wire_mousemove(document, field);
    wire_click(document, field);
    wire_resize(canvas, field);
}

#[inline]
fn client_pos(ev: &web::MouseEvent) -> DVec2 {
    DVec2::new(ev.client_x() as f64, ev.client_y() as f64)
}

fn wire_mousemove(document: &web::Document, field: &SharedField) {
    let field = field.clone();
    dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
        field.borrow_mut().pointer_moved(client_pos(&ev));
    });
}

fn wire_click(document: &web::Document, field: &SharedField) {
    let field = field.clone();
    dom::listen(document, "click", move |ev: web::MouseEvent| {
        let pos = client_pos(&ev);
        field.borrow_mut().clicked(pos);
        log::debug!("[particles] burst at ({:.0}, {:.0})", pos.x, pos.y);
    });
}

fn wire_resize(canvas: &web::HtmlCanvasElement, field: &SharedField) {
    let Some(window) = web::window() else {
        return;
    };
    let canvas = canvas.clone();
    let field = field.clone();
    dom::listen(&window, "resize", move |_: web::Event| {
        let (w, h) = dom::sync_canvas_to_viewport(&canvas);
        field.borrow_mut().resize(w, h);
    });
}
