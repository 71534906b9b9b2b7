//! Canvas 2D draw target

use game_core::render::DrawTarget;
use glam::Vec2;
use log::warn;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub struct CanvasTarget {
    ctx: CanvasRenderingContext2d,
}

impl CanvasTarget {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

fn report(op: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        warn!("canvas {} failed: {:?}", op, e);
    }
}

impl DrawTarget for CanvasTarget {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        report(
            "arc",
            self.ctx.arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            ),
        );
        self.ctx.fill();
    }

    fn stroke_dashed_line(&mut self, from: Vec2, to: Vec2, dash: &[f32], color: &str) {
        let pattern: js_sys::Array = dash.iter().map(|d| JsValue::from_f64(*d as f64)).collect();

        self.ctx.set_stroke_style_str(color);
        report("set_line_dash", self.ctx.set_line_dash(&pattern));
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
        report("set_line_dash", self.ctx.set_line_dash(&js_sys::Array::new()));
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str) {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(color);
        report("fill_text", self.ctx.fill_text(text, x as f64, y as f64));
    }
}
