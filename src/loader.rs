//! Idempotent loader for the external Spotify player script.
//!
//! The script tag is only ever injected once per page. Loader state lives in
//! an explicit state machine rather than being re-derived from DOM queries,
//! and the in-flight load future is cached and shared, so every caller
//! observes the real outcome no matter when it asked.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use futures_channel::oneshot;
use futures_util::future::{self, FutureExt, LocalBoxFuture, Shared};

/// Element id carried by the injected script tag; doubles as the dedupe key.
pub const PLAYER_SCRIPT_ID: &str = "spotify-player";

/// Source path of the vendored player script.
pub const PLAYER_SCRIPT_SRC: &str = "./spotify.js";

/// Error type for script-load failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError(String);

impl LoadError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for LoadError {}

type LoadResult = Result<(), LoadError>;
type SharedLoad = Shared<LocalBoxFuture<'static, LoadResult>>;

/// The seam between the loader state machine and the host document.
///
/// Implementations begin injecting the script element and report the outcome
/// through `done` exactly once; dropping the sender counts as a failure.
pub trait ScriptInjector {
    fn inject(&self, id: &str, src: &str, done: oneshot::Sender<LoadResult>);
}

enum LoadState {
    NotRequested,
    Pending(SharedLoad),
    Loaded,
    Failed(LoadError),
}

/// One-shot script loader with an explicit lifecycle:
/// `NotRequested -> Pending -> Loaded | Failed`.
///
/// A failed load is terminal; there is no retry, no timeout and no way to
/// cancel a request once made.
pub struct PlayerScriptLoader<I> {
    injector: I,
    state: Rc<RefCell<LoadState>>,
}

impl<I: ScriptInjector> PlayerScriptLoader<I> {
    pub fn new(injector: I) -> Self {
        Self {
            injector,
            state: Rc::new(RefCell::new(LoadState::NotRequested)),
        }
    }

    /// Resolve when the player script is loaded.
    ///
    /// The first call injects the script tag; every later call gets a clone
    /// of the same cached future (or an immediately ready result once the
    /// load has settled), so concurrent and late callers all see the one
    /// real outcome.
    pub fn ensure_loaded(&self) -> LocalBoxFuture<'static, LoadResult> {
        let mut state = self.state.borrow_mut();

        match &*state {
            LoadState::Loaded => future::ready(Ok(())).boxed_local(),
            LoadState::Failed(error) => future::ready(Err(error.clone())).boxed_local(),
            LoadState::Pending(load) => load.clone().boxed_local(),
            LoadState::NotRequested => {
                let (done, outcome) = oneshot::channel();
                self.injector.inject(PLAYER_SCRIPT_ID, PLAYER_SCRIPT_SRC, done);

                let slot = Rc::clone(&self.state);
                let load: SharedLoad = async move {
                    let result = outcome.await.unwrap_or_else(|_| {
                        Err(LoadError::new("loadScript: injector dropped without reporting"))
                    });

                    if let Err(error) = &result {
                        eprintln!("Failed to load the Spotify player script: {error}");
                    }

                    *slot.borrow_mut() = match &result {
                        Ok(()) => LoadState::Loaded,
                        Err(error) => LoadState::Failed(error.clone()),
                    };

                    result
                }
                .boxed_local()
                .shared();

                *state = LoadState::Pending(load.clone());
                load.boxed_local()
            }
        }
    }
}

/// Whether a browser document is available for DOM-touching calls.
#[cfg(target_arch = "wasm32")]
pub fn can_use_dom() -> bool {
    web_sys::window().and_then(|window| window.document()).is_some()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn can_use_dom() -> bool {
    false
}

#[cfg(target_arch = "wasm32")]
mod dom {
    use super::*;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::HtmlScriptElement;

    /// Injects the player script tag into `document.head`.
    pub struct DomInjector;

    impl ScriptInjector for DomInjector {
        fn inject(&self, id: &str, src: &str, done: oneshot::Sender<LoadResult>) {
            let Some(document) = web_sys::window().and_then(|window| window.document()) else {
                let _ = done.send(Err(LoadError::new("loadScript: no document available")));
                return;
            };

            // A tag left over from an earlier page lifecycle counts as loaded.
            if document.get_element_by_id(id).is_some() {
                let _ = done.send(Ok(()));
                return;
            }

            let script: HtmlScriptElement = match document
                .create_element("script")
                .ok()
                .and_then(|element| element.dyn_into().ok())
            {
                Some(script) => script,
                None => {
                    let _ = done.send(Err(LoadError::new(
                        "loadScript: could not create a script element",
                    )));
                    return;
                }
            };

            script.set_id(id);
            script.set_type("text/javascript");
            script.set_async(false);
            script.set_defer(true);
            script.set_src(src);

            let done = Rc::new(RefCell::new(Some(done)));

            let on_load = {
                let done = Rc::clone(&done);
                Closure::<dyn FnMut()>::new(move || {
                    if let Some(done) = done.borrow_mut().take() {
                        let _ = done.send(Ok(()));
                    }
                })
            };
            script.set_onload(Some(on_load.as_ref().unchecked_ref()));
            on_load.forget();

            let src = src.to_string();
            let on_error = {
                let done = Rc::clone(&done);
                Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
                    let message = js_sys::Reflect::get(event.as_ref(), &"message".into())
                        .ok()
                        .and_then(|value| value.as_string())
                        .unwrap_or_else(|| format!("failed to fetch {src}"));
                    if let Some(done) = done.borrow_mut().take() {
                        let _ = done.send(Err(LoadError::new(format!("loadScript: {message}"))));
                    }
                })
            };
            script.set_onerror(Some(on_error.as_ref().unchecked_ref()));
            on_error.forget();

            let appended = document
                .head()
                .map(|head| head.append_child(&script).is_ok())
                .unwrap_or(false);
            if !appended {
                if let Some(done) = done.borrow_mut().take() {
                    let _ = done.send(Err(LoadError::new(
                        "loadScript: could not append the script tag",
                    )));
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use dom::DomInjector;

#[cfg(target_arch = "wasm32")]
thread_local! {
    static PLAYER_SCRIPT: PlayerScriptLoader<DomInjector> =
        PlayerScriptLoader::new(DomInjector);
}

/// Load the vendored player script once for the whole page.
#[cfg(target_arch = "wasm32")]
pub fn load_spotify_player() -> LocalBoxFuture<'static, Result<(), LoadError>> {
    PLAYER_SCRIPT.with(|loader| loader.ensure_loaded())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_spotify_player() -> LocalBoxFuture<'static, Result<(), LoadError>> {
    future::ready(Err(LoadError::new("loadScript: no document available"))).boxed_local()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn dom_injector_deduplicates_the_script_tag() {
        let document = web_sys::window().unwrap().document().unwrap();

        let (done, _outcome) = oneshot::channel();
        DomInjector.inject(PLAYER_SCRIPT_ID, PLAYER_SCRIPT_SRC, done);
        assert!(document.get_element_by_id(PLAYER_SCRIPT_ID).is_some());

        // A second request sees the existing tag and reports success at once.
        let (done, mut outcome) = oneshot::channel();
        DomInjector.inject(PLAYER_SCRIPT_ID, PLAYER_SCRIPT_SRC, done);
        assert_eq!(outcome.try_recv(), Ok(Some(Ok(()))));
        assert_eq!(
            document.query_selector_all("script[id='spotify-player']").unwrap().length(),
            1
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeInjector {
        requests: Rc<RefCell<Vec<oneshot::Sender<LoadResult>>>>,
    }

    fn loader_with_fake() -> (
        PlayerScriptLoader<FakeInjector>,
        Rc<RefCell<Vec<oneshot::Sender<LoadResult>>>>,
    ) {
        let requests = Rc::new(RefCell::new(Vec::new()));
        let loader = PlayerScriptLoader::new(FakeInjector {
            requests: Rc::clone(&requests),
        });
        (loader, requests)
    }

    impl ScriptInjector for FakeInjector {
        fn inject(&self, id: &str, src: &str, done: oneshot::Sender<LoadResult>) {
            assert_eq!(id, PLAYER_SCRIPT_ID);
            assert_eq!(src, PLAYER_SCRIPT_SRC);
            self.requests.borrow_mut().push(done);
        }
    }

    #[test]
    fn injects_once_and_fans_out_the_real_outcome() {
        let (loader, requests) = loader_with_fake();

        let mut first = loader.ensure_loaded();
        let mut second = loader.ensure_loaded();
        assert_eq!(requests.borrow().len(), 1);

        // Neither caller resolves before the browser reports back.
        assert!((&mut first).now_or_never().is_none());
        assert!((&mut second).now_or_never().is_none());

        let done = requests.borrow_mut().pop().unwrap();
        done.send(Ok(())).unwrap();

        assert_eq!(first.now_or_never(), Some(Ok(())));
        assert_eq!(second.now_or_never(), Some(Ok(())));

        // Settled state answers immediately and never re-injects.
        assert_eq!(loader.ensure_loaded().now_or_never(), Some(Ok(())));
        assert!(requests.borrow().is_empty());
    }

    #[test]
    fn failure_is_sticky_and_never_retried() {
        let (loader, requests) = loader_with_fake();

        let first = loader.ensure_loaded();
        let done = requests.borrow_mut().pop().unwrap();
        done.send(Err(LoadError::new("loadScript: Script error.")))
            .unwrap();

        let error = first.now_or_never().unwrap().unwrap_err();
        assert_eq!(error.to_string(), "loadScript: Script error.");

        // Later callers get the original failure without a new injection.
        let error = loader.ensure_loaded().now_or_never().unwrap().unwrap_err();
        assert_eq!(error.to_string(), "loadScript: Script error.");
        assert!(requests.borrow().is_empty());
    }

    #[test]
    fn dropped_injector_report_surfaces_as_failure() {
        let (loader, requests) = loader_with_fake();

        let pending = loader.ensure_loaded();
        requests.borrow_mut().clear();

        let error = pending.now_or_never().unwrap().unwrap_err();
        assert_eq!(
            error.to_string(),
            "loadScript: injector dropped without reporting"
        );
    }

    #[test]
    fn dom_is_unavailable_off_the_browser() {
        assert!(!can_use_dom());
        let error = load_spotify_player().now_or_never().unwrap().unwrap_err();
        assert_eq!(error.to_string(), "loadScript: no document available");
    }
}
