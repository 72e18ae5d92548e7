use crate::constants::*;
use crate::dom;
use crate::toggles::{Disclosure, MapView};
use web_sys as web;

pub fn wire_section_toggles(document: &web::Document) {
    wire_tradition_toggles(document);
    wire_map_toggles(document);
}

fn wire_tradition_toggles(document: &web::Document) {
    for button in dom::query_all(document, TRADITION_TOGGLE_SELECTOR) {
        let Some(target_id) = button.get_attribute("data-target") else {
            log::warn!("[sections] toggle without data-target");
            continue;
        };
        let doc = document.clone();
        let btn = button.clone();
        dom::add_click_listener(&button, move |_| {
            let Some(section) = dom::html_by_id(&doc, &target_id) else {
                return;
            };
            toggle_section(&section, &btn);
        });
    }
}

fn toggle_section(section: &web::HtmlElement, button: &web::Element) {
    let style = section.style();
    let display = style.get_property_value("display").unwrap_or_default();
    let step = Disclosure::from_display(&display);
    let cl = section.class_list();
    if step == Disclosure::Expand {
        _ = style.set_property("display", "grid");
    }
    _ = cl.remove_1(step.removed_class());
    _ = cl.add_1(step.added_class());
    button.set_text_content(Some(step.button_label()));

    if step == Disclosure::Collapse {
        let section = section.clone();
        dom::set_timeout(COLLAPSE_DELAY_MS, move || {
            dom::set_style(&section, "display", "none");
            _ = section.class_list().remove_1(Disclosure::Collapse.added_class());
        });
    }
}

fn wire_map_toggles(document: &web::Document) {
    for button in dom::query_all(document, MAP_TOGGLE_SELECTOR) {
        let doc = document.clone();
        let btn = button.clone();
        dom::add_click_listener(&button, move |_| {
            let view = btn.get_attribute("data-view").unwrap_or_default();
            show_map_view(&doc, &btn, MapView::from_data_view(&view));
        });
    }
}

fn show_map_view(document: &web::Document, button: &web::Element, view: Option<MapView>) {
    for other in dom::query_all(document, MAP_TOGGLE_SELECTOR) {
        _ = other.class_list().remove_1(ACTIVE_CLASS);
    }
    _ = button.class_list().add_1(ACTIVE_CLASS);

    for iframe in dom::query_all(document, MAP_IFRAME_SELECTOR) {
        _ = iframe.class_list().remove_1(ACTIVE_CLASS);
    }
    if let Some(el) = view.and_then(|v| document.get_element_by_id(v.iframe_id())) {
        _ = el.class_list().add_1(ACTIVE_CLASS);
    }
}
