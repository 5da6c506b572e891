//! Canvas 2D backend: executes draw commands on a browser canvas

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::shapes::{DrawCommand, scene};
use crate::sim::GameState;

/// Owns the 2D context of the game canvas
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        ctx.set_text_align("center");
        Ok(Self { ctx })
    }

    /// Draw one frame of the current state
    pub fn render(&self, state: &GameState) -> Result<(), JsValue> {
        for command in scene(state) {
            self.execute(&command)?;
        }
        Ok(())
    }

    fn execute(&self, command: &DrawCommand) -> Result<(), JsValue> {
        match command {
            DrawCommand::Clear { size } => {
                self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
            }
            DrawCommand::FillRect { pos, size, color } => {
                self.ctx.set_fill_style_str(color);
                self.ctx
                    .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
            }
            DrawCommand::OutlinedText {
                text,
                pos,
                font,
                fill,
                stroke,
                line_width,
            } => {
                self.ctx.set_font(font);
                self.ctx.set_stroke_style_str(stroke);
                self.ctx.set_line_width(*line_width);
                self.ctx.set_fill_style_str(fill);
                self.ctx.stroke_text(text, pos.x as f64, pos.y as f64)?;
                self.ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
            }
        }
        Ok(())
    }
}
