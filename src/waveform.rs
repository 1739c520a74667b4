use egui::{pos2, Color32, Pos2, Rect, Sense, Shape, Stroke};

const BACKGROUND: Color32 = Color32::from_rgb(16, 16, 18);
const WAVE_COLOR: Color32 = Color32::from_rgb(190, 190, 200);
const START_COLOR: Color32 = Color32::from_rgb(70, 140, 255);
const END_COLOR: Color32 = Color32::from_rgb(240, 90, 90);
const REGION_FILL: Color32 = Color32::from_rgba_premultiplied(100, 100, 100, 140);

/// Waveform display for the current case: a reduced sample sequence plus
/// two pointer-placed region markers. Primary click places the start
/// marker, secondary click the end marker; when both are set the spanned
/// interval is filled.
///
/// Marker positions are canvas-local pixel coordinates. Only x is used by
/// rendering; y is kept as given. There is no bounds check against the
/// canvas, so a coordinate placed before a resize draws wherever it says.
#[derive(Default)]
pub struct WaveformView {
    pub samples: Vec<f32>,
    pub start: Option<Pos2>,
    pub end: Option<Pos2>,
}

impl WaveformView {
    /// Replace the displayed sequence wholesale. Markers refer to the
    /// previous case once this happens, so both are cleared.
    pub fn set_waveform(&mut self, samples: Vec<f32>) {
        self.samples = samples;
        self.start = None;
        self.end = None;
    }

    pub fn primary_down(&mut self, pos: Pos2) {
        self.start = Some(pos);
    }

    pub fn secondary_down(&mut self, pos: Pos2) {
        self.end = Some(pos);
    }

    /// Paint list for the current state, positioned inside `rect`.
    /// Pure: no state is touched, so repainting is free to repeat it.
    ///
    /// Amplitude maps directly to vertical offset from the center line
    /// (`center - v * center`), with no clamping; callers pre-normalize
    /// to roughly [-1, 1] and extreme values draw off-canvas.
    pub fn shapes(&self, rect: Rect) -> Vec<Shape> {
        // An empty sequence renders nothing at all, markers included.
        if self.samples.is_empty() {
            return Vec::new();
        }
        let mut shapes = Vec::new();
        let width = rect.width();
        let height = rect.height();

        let x_step = width / self.samples.len() as f32;
        let center_y = height / 2.0;
        for i in 1..self.samples.len() {
            let x0 = rect.left() + (i - 1) as f32 * x_step;
            let y0 = rect.top() + center_y - self.samples[i - 1] * center_y;
            let x1 = rect.left() + i as f32 * x_step;
            let y1 = rect.top() + center_y - self.samples[i] * center_y;
            shapes.push(Shape::line_segment(
                [pos2(x0, y0), pos2(x1, y1)],
                Stroke::new(1.0, WAVE_COLOR),
            ));
        }

        if let Some(start) = self.start {
            let x = rect.left() + start.x;
            shapes.push(Shape::line_segment(
                [pos2(x, rect.top()), pos2(x, rect.bottom())],
                Stroke::new(2.0, START_COLOR),
            ));
        }
        if let Some(end) = self.end {
            let x = rect.left() + end.x;
            shapes.push(Shape::line_segment(
                [pos2(x, rect.top()), pos2(x, rect.bottom())],
                Stroke::new(2.0, END_COLOR),
            ));
        }
        if let (Some(start), Some(end)) = (self.start, self.end) {
            // End may sit left of start; normalize to a non-negative span.
            let region = Rect::from_two_pos(
                pos2(rect.left() + start.x, rect.top()),
                pos2(rect.left() + end.x, rect.bottom()),
            );
            shapes.push(Shape::rect_filled(region, 0.0, REGION_FILL));
        }
        shapes
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let size = ui.available_size();
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        let rect = response.rect;
        if let Some(pos) = response.interact_pointer_pos() {
            let local = pos2(pos.x - rect.left(), pos.y - rect.top());
            if ui.input(|i| i.pointer.button_pressed(egui::PointerButton::Primary)) {
                self.primary_down(local);
            }
            if ui.input(|i| i.pointer.button_pressed(egui::PointerButton::Secondary)) {
                self.secondary_down(local);
            }
        }
        painter.rect_filled(rect, 0.0, BACKGROUND);
        painter.extend(self.shapes(rect));
        response
    }
}
