//! Canvas 2D presentation
//!
//! Pure read of `GameState` onto the playfield canvas: blue basket
//! rectangle pinned to the bottom, red circles for falling objects.
//! Score/missed/game-over text lives in the DOM HUD, not here.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::*;
use crate::sim::GameState;

/// Playfield renderer bound to one canvas
pub struct Renderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Renderer {
    /// Bind to a canvas and size it to the logical playfield
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        canvas.set_width(PLAYFIELD_WIDTH as u32);
        canvas.set_height(PLAYFIELD_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()?;

        Ok(Self { canvas, ctx })
    }

    /// Draw the current state. No state mutation originates here.
    pub fn render(&self, state: &GameState) {
        // Playfield background
        self.ctx.set_fill_style_str("#111");
        self.ctx.fill_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );

        // Basket
        self.ctx.set_fill_style_str("#00f");
        self.ctx.fill_rect(
            state.basket.x as f64,
            CATCH_LINE as f64,
            BASKET_WIDTH as f64,
            BASKET_HEIGHT as f64,
        );

        // Falling objects
        self.ctx.set_fill_style_str("#f00");
        let r = (OBJECT_SIZE / 2.0) as f64;
        for obj in &state.objects {
            self.ctx.begin_path();
            let cx = obj.pos.x as f64 + r;
            let cy = obj.pos.y as f64 + r;
            let _ = self.ctx.arc(cx, cy, r, 0.0, TAU);
            self.ctx.fill();
        }
    }
}
