use crate::constants::*;
use crate::dom;
use crate::navigation::{
    active_section, anchor_scroll_top, anchor_selector, link_targets_section, navbar_shadow, SectionBounds,
};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_navigation(document: &web::Document) {
    wire_menu_toggle(document);
    wire_scroll(document);
    wire_smooth_anchors(document);
}

fn wire_menu_toggle(document: &web::Document) {
    let Some(menu) = document.get_element_by_id(NAV_MENU_ID) else {
        log::warn!("[nav] missing #{NAV_MENU_ID}");
        return;
    };
    if let Some(toggle) = document.get_element_by_id(NAV_TOGGLE_ID) {
        let menu = menu.clone();
        dom::add_click_listener(&toggle, move |_| {
            _ = menu.class_list().toggle(ACTIVE_CLASS);
        });
    }
    for link in dom::query_all(document, NAV_LINK_SELECTOR) {
        let menu = menu.clone();
        dom::add_click_listener(&link, move |_| {
            _ = menu.class_list().remove_1(ACTIVE_CLASS);
        });
    }
}

fn section_bounds(document: &web::Document) -> Vec<SectionBounds> {
    dom::query_all(document, SECTION_SELECTOR)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .map(|el| SectionBounds {
            id: el.id(),
            top: el.offset_top() as f64,
            height: el.offset_height() as f64,
        })
        .collect()
}

/// Mark the nav link for the section currently under the navbar.
pub fn update_active_link(document: &web::Document, scroll_y: f64) {
    let sections = section_bounds(document);
    let Some(id) = active_section(&sections, scroll_y) else {
        return;
    };
    for link in dom::query_all(document, NAV_LINK_SELECTOR) {
        let cl = link.class_list();
        _ = cl.remove_1(ACTIVE_CLASS);
        let href = link.get_attribute("href").unwrap_or_default();
        if link_targets_section(&href, id) {
            _ = cl.add_1(ACTIVE_CLASS);
        }
    }
}

fn wire_scroll(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let navbar = dom::query_html(document, NAVBAR_SELECTOR);
    let doc = document.clone();
    let win = window.clone();
    dom::listen(&window, "scroll", move |_: web::Event| {
        let scroll_y = win.scroll_y().unwrap_or(0.0);
        update_active_link(&doc, scroll_y);
        if let Some(navbar) = &navbar {
            dom::set_style(navbar, "box-shadow", navbar_shadow(scroll_y));
        }
    });
    update_active_link(document, window.scroll_y().unwrap_or(0.0));
}

fn wire_smooth_anchors(document: &web::Document) {
    for anchor in dom::query_all(document, ANCHOR_SELECTOR) {
        let doc = document.clone();
        let link = anchor.clone();
        dom::add_click_listener(&anchor, move |ev: web::MouseEvent| {
            ev.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(target) = anchor_selector(&href).and_then(|sel| dom::query_html(&doc, sel))
            else {
                return;
            };
            let Some(window) = web::window() else {
                return;
            };
            let opts = web::ScrollToOptions::new();
            opts.set_top(anchor_scroll_top(target.offset_top() as f64));
            opts.set_behavior(web::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        });
    }
}
