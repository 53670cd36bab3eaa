//! WebAssembly bindings for browser front ends
//!
//! Exposes [`World`] to JavaScript. Cell data is handed out as copied
//! arrays rather than pointers into linear memory.

use wasm_bindgen::prelude::*;

use crate::game::{Direction, World, WorldConfig};

#[wasm_bindgen]
pub struct WasmWorld {
    world: World,
}

#[wasm_bindgen]
impl WasmWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, spawn_index: u32) -> Result<WasmWorld, JsError> {
        console_error_panic_hook::set_once();
        let config = WorldConfig::new(width as usize).with_spawn_index(spawn_index as usize);
        let world = World::from_config(&config)?;
        Ok(Self { world })
    }

    pub fn start(&mut self) {
        self.world.start();
    }

    /// Advance one tick; returns the status code afterwards
    pub fn step(&mut self) -> u8 {
        self.world.step();
        self.world.status().code()
    }

    /// 0 = Up, 1 = Right, 2 = Down, 3 = Left; other codes are ignored
    pub fn change_direction(&mut self, code: u8) {
        if let Some(direction) = Direction::from_code(code) {
            self.world.change_direction(direction);
        }
    }

    pub fn width(&self) -> u32 {
        self.world.width() as u32
    }

    pub fn snake_cells(&self) -> Vec<u32> {
        self.world.snake().iter().map(|&cell| cell as u32).collect()
    }

    pub fn reward_cell(&self) -> Option<u32> {
        self.world.reward_cell().map(|cell| cell as u32)
    }

    pub fn score(&self) -> u32 {
        self.world.score() as u32
    }

    /// 0 = Unstarted, 1 = Played, 2 = Won, 3 = Lost
    pub fn status(&self) -> u8 {
        self.world.status().code()
    }

    pub fn status_text(&self) -> String {
        self.world.status().text().to_string()
    }
}
