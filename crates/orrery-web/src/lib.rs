pub mod runner;

pub use runner::GameRunner;

// Re-exported so `export_game!` can seed the runner without the game crate
// depending on js-sys directly.
pub use js_sys;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates `thread_local!` storage for the GameRunner, a `with_runner()`
/// helper, and the host-facing exports (configure, init, tick, pointer and
/// custom input, manifest, buffer accessors).
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use orrery_engine::*;
///
/// mod game;
/// use game::MyScene;
///
/// orrery_web::export_game!(MyScene, "my-scene");
/// ```
///
/// `$game_type` must implement `orrery_engine::Game` and provide `new()`.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        fn ensure_runner() {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                if borrow.is_none() {
                    let seed = ($crate::js_sys::Math::random() * u32::MAX as f64) as u64 | 1;
                    *borrow = Some($crate::GameRunner::with_seed(<$game_type>::new(), seed));
                }
            });
        }

        /// Optional: apply a JSON configuration before `game_init`.
        #[wasm_bindgen]
        pub fn game_configure(json: &str) -> Result<(), JsValue> {
            ensure_runner();
            with_runner(|r| r.configure(json)).map_err(|e| JsValue::from_str(&e.to_string()))
        }

        #[wasm_bindgen]
        pub fn game_init() -> Result<(), JsValue> {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            ensure_runner();
            match with_runner(|r| r.init()) {
                Ok(()) => {
                    log::info!("{}: initialized", $game_name);
                    Ok(())
                }
                Err(e) => {
                    log::error!("{}: init failed: {}", $game_name, e);
                    Err(JsValue::from_str(&e.to_string()))
                }
            }
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        /// `hits` are entity ids under the pointer, nearest first.
        #[wasm_bindgen]
        pub fn game_pointer_move(ndc_x: f32, ndc_y: f32, client_x: f32, client_y: f32, hits: &[u32]) {
            let pos = PointerPos::from_coords(ndc_x, ndc_y, client_x, client_y);
            with_runner(|r| r.push_pointer_move(pos, hits));
        }

        #[wasm_bindgen]
        pub fn game_pointer_click(ndc_x: f32, ndc_y: f32, client_x: f32, client_y: f32, hits: &[u32]) {
            let pos = PointerPos::from_coords(ndc_x, ndc_y, client_x, client_y);
            with_runner(|r| r.push_pointer_click(pos, hits));
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        #[wasm_bindgen]
        pub fn game_scene_manifest() -> Result<String, JsValue> {
            with_runner(|r| r.scene_manifest_json()).map_err(|e| JsValue::from_str(&e.to_string()))
        }

        #[wasm_bindgen]
        pub fn game_shutdown() {
            RUNNER.with(|cell| {
                if let Some(mut runner) = cell.borrow_mut().take() {
                    runner.shutdown();
                }
            });
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_header_ptr() -> *const f32 {
            with_runner(|r| r.header_ptr())
        }

        #[wasm_bindgen]
        pub fn get_camera_ptr() -> *const f32 {
            with_runner(|r| r.camera_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            with_runner(|r| r.instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count())
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}
