use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::{COLLAPSED_CLASS, MENU_CONTAINER_ID, TOGGLE_CONTROL_ID};

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|window| window.document())
}

/// Wires the host page's toggle control to the side menu container:
/// each click flips the collapsed class on the container.
///
/// When the host markup does not carry the control, nothing is bound
/// and nothing is reported. The listener stays registered for the
/// lifetime of the page.
pub fn bind_menu_toggle() {
    let Some(doc) = document() else { return };
    let Some(control) = doc.get_element_by_id(TOGGLE_CONTROL_ID) else {
        return;
    };

    let listener = Closure::<dyn FnMut()>::new(move || {
        let Some(menu) = document().and_then(|doc| doc.get_element_by_id(MENU_CONTAINER_ID))
        else {
            return;
        };
        let _ = menu.class_list().toggle(COLLAPSED_CLASS);
    });

    if control
        .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        .is_ok()
    {
        listener.forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    fn install(doc: &web_sys::Document, id: &str) -> web_sys::Element {
        let element = doc.create_element("div").expect("element must be created");
        element.set_id(id);
        doc.body()
            .expect("test page must have a body")
            .append_child(&element)
            .expect("element must attach");
        element
    }

    fn click(element: &web_sys::Element) {
        let event = web_sys::Event::new("click").expect("event must be created");
        element.dispatch_event(&event).expect("event must dispatch");
    }

    #[wasm_bindgen_test]
    fn test_clicks_flip_the_collapsed_class() {
        let doc = document().expect("test page must have a document");
        let control = install(&doc, TOGGLE_CONTROL_ID);
        let menu = install(&doc, MENU_CONTAINER_ID);

        bind_menu_toggle();

        click(&control);
        assert!(menu.class_list().contains(COLLAPSED_CLASS));
        click(&control);
        assert!(!menu.class_list().contains(COLLAPSED_CLASS));

        control.remove();
        menu.remove();
    }

    #[wasm_bindgen_test]
    fn test_missing_control_binds_nothing() {
        let doc = document().expect("test page must have a document");
        let menu = install(&doc, MENU_CONTAINER_ID);

        bind_menu_toggle();

        click(&menu);
        assert!(!menu.class_list().contains(COLLAPSED_CLASS));

        menu.remove();
    }
}
