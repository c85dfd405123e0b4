use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Storage,
};
use yew::prelude::*;

use crate::error::PageError;
use crate::motion::{observer_thresholds, Reveal, Sighting};
use crate::scroll::{navigate, SectionId, Span};
use crate::theme::{PreferenceStore, Theme};

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// `window.localStorage`, looked up on every access.
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<Storage, PageError> {
        window()
            .ok_or(PageError::NoWindow)?
            .local_storage()
            .map_err(|err| PageError::Storage(js_error(err)))?
            .ok_or_else(|| PageError::Storage("local storage is disabled".into()))
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| PageError::Storage(js_error(err)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| PageError::Storage(js_error(err)))
    }
}

pub fn apply_theme(theme: Theme) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
    }
}

fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn section_element(section: SectionId) -> Option<Element> {
    window()?.document()?.get_element_by_id(section.id())
}

pub fn section_span(section: SectionId) -> Option<Span> {
    let rect = section_element(section)?.get_bounding_client_rect();
    Some(Span {
        top: rect.top(),
        bottom: rect.bottom(),
    })
}

/// Smooth-scrolls to `section`, or fails with `MissingElement` without
/// touching the page.
pub fn scroll_to_section(section: SectionId) -> Result<SectionId, PageError> {
    let document = window().and_then(|w| w.document());
    navigate(
        section,
        |id| document.as_ref()?.get_element_by_id(id),
        |element| {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        },
    )
}

/// Scroll helper for buttons that don't touch the nav highlight.
pub fn jump_to(section: SectionId) {
    if let Err(err) = scroll_to_section(section) {
        log::debug!("skipping scroll: {err}");
    }
}

pub fn scroll_to_top() {
    let Some(win) = window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

/// Writes `text` to the clipboard in the background; a rejected write is
/// only logged.
pub fn copy_to_clipboard(text: &str) {
    let Some(win) = window() else {
        log::warn!("{}", PageError::NoWindow);
        return;
    };
    let promise = win.navigator().clipboard().write_text(text);
    spawn_local(async move {
        if let Err(err) = JsFuture::from(promise).await {
            log::warn!("{}", PageError::Clipboard(js_error(err)));
        }
    });
}

pub fn open_in_new_tab(url: &str) -> Result<(), PageError> {
    window()
        .ok_or(PageError::NoWindow)?
        .open_with_url_and_target(url, "_blank")
        .map(|_| ())
        .map_err(|err| PageError::OpenTab(js_error(err)))
}

struct ScrollListener {
    window: web_sys::Window,
    closure: Closure<dyn FnMut()>,
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.closure.as_ref().unchecked_ref());
    }
}

fn listen_for_scroll(on_scroll: Callback<f64>) -> Option<ScrollListener> {
    let window = window()?;
    let closure = Closure::<dyn FnMut()>::new(move || on_scroll.emit(scroll_y()));
    if let Err(err) =
        window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
    {
        log::warn!("registering scroll listener: {}", js_error(err));
        return None;
    }
    Some(ScrollListener { window, closure })
}

/// Calls `on_scroll` with the vertical offset on every window scroll, for as
/// long as the calling component is mounted.
#[hook]
pub fn use_window_scroll(on_scroll: Callback<f64>) {
    use_effect_with((), move |_| {
        let listener = listen_for_scroll(on_scroll);
        move || drop(listener)
    });
}

#[derive(Clone, Copy, Default, PartialEq)]
struct RevealLatch(Reveal);

impl Reducible for RevealLatch {
    type Action = (Sighting, f64);

    fn reduce(self: Rc<Self>, (sighting, threshold): (Sighting, f64)) -> Rc<Self> {
        let next = self.0.observe(sighting, threshold);
        if next == self.0 {
            self
        } else {
            Rc::new(Self(next))
        }
    }
}

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_reveal(
    node: &NodeRef,
    threshold: f64,
    latch: UseReducerDispatcher<RevealLatch>,
) -> Result<RevealObserver, PageError> {
    let element = node
        .cast::<Element>()
        .ok_or_else(|| PageError::Observer("target is not mounted".into()))?;

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let viewport = entry
                    .root_bounds()
                    .map(|bounds| bounds.height())
                    .unwrap_or_else(viewport_height);
                let sighting = Sighting::new(
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                    entry.intersection_rect().height(),
                    viewport,
                );
                latch.dispatch((sighting, threshold));
            }
        },
    );

    let options = IntersectionObserverInit::new();
    let ratios: Array = observer_thresholds(threshold)
        .into_iter()
        .map(JsValue::from_f64)
        .collect();
    options.set_threshold(&ratios);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|err| PageError::Observer(js_error(err)))?;
    observer.observe(&element);

    Ok(RevealObserver {
        observer,
        _callback: callback,
    })
}

/// Attach the returned ref to a section; the state flips to revealed the
/// first time at least `threshold` of it, or of the viewport, is covered.
#[hook]
pub fn use_reveal(threshold: f64) -> (NodeRef, Reveal) {
    let node = use_node_ref();
    let latch = use_reducer_eq(RevealLatch::default);

    {
        let dispatcher = latch.dispatcher();
        use_effect_with(node.clone(), move |node| {
            let observer = match observe_reveal(node, threshold, dispatcher) {
                Ok(observer) => Some(observer),
                Err(err) => {
                    log::warn!("{err}");
                    None
                }
            };
            move || drop(observer)
        });
    }

    (node, latch.0)
}
