use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

pub const LAZY_SRC_ATTRIBUTE: &str = "data-src";

/// Defers image loads until the image scrolls into view. Each image is
/// loaded once and then dropped from observation.
pub struct LazyImages {
    observer: IntersectionObserver,
    _on_intersect: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl LazyImages {
    pub fn new() -> Result<Self, JsValue> {
        let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        let image = entry.target();
                        if let Err(err) = load_image(&image) {
                            crate::error(&format!("could not load image: {:?}", err));
                        }
                        observer.unobserve(&image);
                    }
                }
            },
        );

        let observer = IntersectionObserver::new(on_intersect.as_ref().unchecked_ref())?;

        Ok(LazyImages {
            observer,
            _on_intersect: on_intersect,
        })
    }

    /// Starts watching every `img[data-src]` below `container`.
    pub fn observe_within(&self, container: &Element) -> Result<(), JsValue> {
        let images = container.query_selector_all(&format!("img[{}]", LAZY_SRC_ATTRIBUTE))?;
        for index in 0..images.length() {
            if let Some(image) = images.item(index) {
                self.observer.observe(image.unchecked_ref());
            }
        }
        Ok(())
    }

    /// Forgets every observed image, e.g. before the list is rebuilt.
    pub fn reset(&self) {
        self.observer.disconnect();
    }
}

/// Moves `data-src` into `src`. A second call finds no `data-src` and does nothing.
pub fn load_image(image: &Element) -> Result<(), JsValue> {
    if let Some(src) = image.get_attribute(LAZY_SRC_ATTRIBUTE) {
        image.set_attribute("src", &src)?;
        image.remove_attribute(LAZY_SRC_ATTRIBUTE)?;
    }
    Ok(())
}
