//! Browser bridge.
//!
//! Exposes an [`ArenaHandle`] to JavaScript. The page owns the canvas,
//! pointer lock and `requestAnimationFrame`; each frame it calls
//! [`ArenaHandle::frame`] and then reads [`ArenaHandle::snapshot_json`] and
//! [`ArenaHandle::drain_hud_json`] to update its scene graph and HUD.

use wasm_bindgen::prelude::*;

use crate::game::config::ArenaConfig;
use crate::game::scenes::ArenaScene;
use crate::input::{InputAction, KeyCode};

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct ArenaHandle {
    scene: ArenaScene,
}

#[wasm_bindgen]
impl ArenaHandle {
    /// Default arena with the given RNG seed. `now_ms` is `Date.now()`.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64, now_ms: f64) -> Result<ArenaHandle, JsValue> {
        console_error_panic_hook::set_once();
        let config = ArenaConfig {
            seed,
            ..ArenaConfig::default()
        };
        let scene = ArenaScene::new(config, now_ms).map_err(to_js)?;
        Ok(Self { scene })
    }

    /// Arena from a JSON config string.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str, now_ms: f64) -> Result<ArenaHandle, JsValue> {
        console_error_panic_hook::set_once();
        let config = ArenaConfig::from_json_str(json).map_err(to_js)?;
        let scene = ArenaScene::new(config, now_ms).map_err(to_js)?;
        Ok(Self { scene })
    }

    /// Call when pointer lock is acquired.
    pub fn start(&mut self) {
        self.scene.start();
    }

    /// Call when pointer lock or fullscreen is lost.
    pub fn stop(&mut self) {
        self.scene.stop();
    }

    /// Advance by one rendered frame. Returns the number of ticks run.
    pub fn frame(&mut self, delta_s: f32, now_ms: f64) -> Result<u32, JsValue> {
        self.scene.update(delta_s, now_ms).map_err(to_js)
    }

    /// Forward a `KeyboardEvent.code`. Returns `true` if the key is bound,
    /// so the page can `preventDefault` it.
    pub fn key(&mut self, code: &str, pressed: bool) -> bool {
        self.scene.key(KeyCode::from_web_code(code), pressed)
    }

    /// Rebind a `KeyboardEvent.code` to `forward`, `back`, `left`, `right`
    /// or `jump`. Returns `false` if either name is unknown.
    #[wasm_bindgen(js_name = bindKey)]
    pub fn bind_key(&mut self, code: &str, action: &str) -> bool {
        let key = KeyCode::from_web_code(code);
        match InputAction::from_name(action) {
            Some(action) if key != KeyCode::Unknown => {
                self.scene.bind_key(key, action);
                true
            }
            _ => false,
        }
    }

    #[wasm_bindgen(js_name = unbindKey)]
    pub fn unbind_key(&mut self, code: &str) {
        self.scene.unbind_key(KeyCode::from_web_code(code));
    }

    /// Forward `movementX` / `movementY`.
    pub fn look(&mut self, dx: f32, dy: f32) {
        self.scene.look(dx, dy);
    }

    pub fn fire(&mut self) {
        self.scene.fire();
    }

    #[wasm_bindgen(js_name = playerHealth)]
    pub fn player_health(&self) -> i32 {
        self.scene.player().health
    }

    /// Static wall blocks as JSON, for building the level once.
    #[wasm_bindgen(js_name = wallsJson)]
    pub fn walls_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.scene.walls()).map_err(to_js)
    }

    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.scene.snapshot().to_json().map_err(to_js)
    }

    #[wasm_bindgen(js_name = drainHudJson)]
    pub fn drain_hud_json(&mut self) -> Result<String, JsValue> {
        serde_json::to_string(&self.scene.drain_hud()).map_err(to_js)
    }
}
