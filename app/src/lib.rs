use orrery_engine::*;
use wasm_bindgen::prelude::*;

mod backdrop;
mod bodies;
mod game;
mod sim;
mod tour;

use game::SolarSystem;

orrery_web::export_game!(SolarSystem, "solar-system", vectors);
