//! Desktop preview app for myrtio-matrix-composer effects
//!
//! Renders the 16x16 matrix in a window with interactive controls.
//! All state changes go through the Renderer + IntentChannel API.

use std::time::{Instant as StdInstant, SystemTime, UNIX_EPOCH};

use eframe::egui::{self};
use myrtio_matrix_composer::{
    EffectId, FrameBuffer, HourFormat, Instant, IntentChannel, IntentSender, MATRIX_HEIGHT,
    MATRIX_WIDTH, MatrixEngineConfig, MatrixIntent, Renderer, TimeZone,
};

/// Size of each LED in pixels
const LED_SIZE: f32 = 24.0;

/// Gap between LEDs
const LED_GAP: f32 = 3.0;

/// Real panel refresh period
const FRAME_PERIOD_MS: u64 = 100;

/// Intent channel size
const INTENT_CHANNEL_SIZE: usize = 16;

const LED_ON: egui::Color32 = egui::Color32::from_rgb(255, 70, 40);
const LED_OFF: egui::Color32 = egui::Color32::from_rgb(40, 20, 20);

/// Static intent channel for communication between UI and renderer
static INTENTS_CHANNEL: IntentChannel<INTENT_CHANNEL_SIZE> =
    IntentChannel::<INTENT_CHANNEL_SIZE>::new();

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 720.0])
            .with_title("Matrix Composer Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "myrtio-matrix-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    /// The renderer instance
    renderer: Renderer<'static, INTENT_CHANNEL_SIZE>,
    /// Intent sender for UI changes
    intent_sender: IntentSender<'static, INTENT_CHANNEL_SIZE>,
    /// Last frame produced by the renderer
    frame: FrameBuffer,

    // UI state (tracked to detect changes and send intents)
    /// Currently selected effect ID
    effect_id: EffectId,
    /// Synthetic monotonic time in milliseconds
    t_ms: u64,
    /// Synthetic time of the last rendered frame
    last_render_ms: Option<u64>,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether animation is playing
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// Seconds added to the system clock, to preview minute changes
    clock_skew: i64,
    twelve_hour: bool,
    sand_enabled: bool,
    powered: bool,
    /// POSIX TZ string being edited
    time_zone: String,
    time_zone_error: Option<String>,
    led_size: f32,
}

impl PreviewApp {
    fn new() -> Self {
        let initial_effect = EffectId::SandClock;
        let config = MatrixEngineConfig {
            effect: initial_effect,
            ..MatrixEngineConfig::default()
        };

        let renderer =
            Renderer::<INTENT_CHANNEL_SIZE>::new(INTENTS_CHANNEL.receiver(), &config);
        let intent_sender = INTENTS_CHANNEL.sender();

        Self {
            renderer,
            intent_sender,
            frame: FrameBuffer::new(config.pixel_map),
            effect_id: initial_effect,
            t_ms: 0,
            last_render_ms: None,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            clock_skew: 0,
            twelve_hour: false,
            sand_enabled: config.sand_enabled,
            powered: true,
            time_zone: String::from("UTC0"),
            time_zone_error: None,
            led_size: LED_SIZE,
        }
    }

    fn send(&self, intent: MatrixIntent) {
        let _ = self.intent_sender.try_send(intent);
    }

    fn unix_time(&self) -> i64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX));
        now + self.clock_skew
    }

    /// Reset time to zero
    fn reset_time(&mut self) {
        self.t_ms = 0;
        self.last_render_ms = None;
        self.last_frame = StdInstant::now();
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = if delta_ms_f64.is_finite() {
                delta_ms_f64.max(0.0) as u64
            } else {
                0
            };
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }

    /// Advance the renderer at the panel frame rate
    fn render_due_frames(&mut self) {
        let due = self
            .last_render_ms
            .is_none_or(|last| self.t_ms >= last + FRAME_PERIOD_MS);
        if !due {
            return;
        }
        self.last_render_ms = Some(self.t_ms);
        let unix_time = self.unix_time();
        self.frame = self
            .renderer
            .render(Instant::from_millis(self.t_ms), unix_time)
            .clone();
    }

    fn apply_time_zone(&mut self) {
        match TimeZone::parse(&self.time_zone) {
            Ok(zone) => {
                self.time_zone_error = None;
                self.send(MatrixIntent::SetTimeZone(zone));
            }
            Err(err) => self.time_zone_error = Some(err.to_string()),
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        self.render_due_frames();
        self.effect_id = self.renderer.state().effect();

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("⏮ Reset").clicked() {
                    self.reset_time();
                }
                if ui
                    .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                    .clicked()
                {
                    self.playing = !self.playing;
                }
                ui.label("Speed:");
                ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));
            });

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label("Effect:");
                let mut selected_effect = self.effect_id;
                egui::ComboBox::from_id_salt("effect_selector")
                    .selected_text(self.effect_id.as_str())
                    .show_ui(ui, |ui| {
                        for id in EffectId::ALL {
                            ui.selectable_value(&mut selected_effect, id, id.as_str());
                        }
                    });
                if selected_effect != self.effect_id {
                    self.send(MatrixIntent::SwitchEffect(selected_effect));
                }
                if ui.button("Next").clicked() {
                    self.send(MatrixIntent::NextEffect);
                }
                if ui.button("Reseed").clicked() {
                    self.send(MatrixIntent::Reseed);
                }
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                if ui.checkbox(&mut self.powered, "Display on").changed() {
                    self.send(MatrixIntent::SetDisplayPower(self.powered));
                }
                if ui.checkbox(&mut self.twelve_hour, "12 hour").changed() {
                    let format = if self.twelve_hour {
                        HourFormat::H12
                    } else {
                        HourFormat::H24
                    };
                    self.send(MatrixIntent::SetHourFormat(format));
                }
                if ui.checkbox(&mut self.sand_enabled, "Sand").changed() {
                    self.send(MatrixIntent::SetSandEnabled(self.sand_enabled));
                }
                if ui.button("+1 min").clicked() {
                    self.clock_skew += 60;
                }
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("TZ:");
                let response = ui.text_edit_singleline(&mut self.time_zone);
                if response.lost_focus() || ui.button("Apply").clicked() {
                    self.apply_time_zone();
                }
                if let Some(err) = &self.time_zone_error {
                    ui.colored_label(egui::Color32::RED, err);
                }
            });

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label("LED size:");
                ui.add(egui::Slider::new(&mut self.led_size, 8.0..=40.0));
            });

            ui.add_space(16.0);

            // === Matrix Display ===
            let pitch = self.led_size + LED_GAP;
            #[allow(clippy::cast_precision_loss)]
            let size = egui::vec2(MATRIX_WIDTH as f32 * pitch, MATRIX_HEIGHT as f32 * pitch);
            let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
            let origin = response.rect.min;

            #[allow(clippy::cast_possible_truncation)]
            for y in 0..MATRIX_HEIGHT as u8 {
                for x in 0..MATRIX_WIDTH as u8 {
                    let rect = egui::Rect::from_min_size(
                        egui::pos2(
                            origin.x + f32::from(x) * pitch,
                            origin.y + f32::from(y) * pitch,
                        ),
                        egui::vec2(self.led_size, self.led_size),
                    );
                    let color = if self.frame.pixel(x, y) { LED_ON } else { LED_OFF };
                    painter.circle_filled(rect.center(), self.led_size / 2.0, color);
                }
            }
        });
    }
}
