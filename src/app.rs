use eframe::{App, CreationContext, Frame, egui};
use egui::{Color32, RichText};
use std::time::{Duration, Instant};
use zeroize::Zeroize;

use crate::generator::{self, CustomPosition, GeneratorConfig, MAX_LENGTH, MIN_LENGTH};
use crate::history::PasswordHistory;
use crate::qr::generate_qr_code_data;
use crate::settings::AppSettings;
use crate::strength;
use crate::timer::ExpiryTimer;

/// How long the "Copied!" notice stays on screen, in seconds.
const COPIED_NOTICE_SECONDS: u64 = 2;

/// The main eframe app struct: one configurable password-generator widget.
pub struct PassForgeApp {
    // The form state
    pub length: usize,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub exclude_similar: bool,
    pub custom_text: String,
    pub custom_position: CustomPosition,

    // Generated output
    pub password: String,
    pub generation_error: Option<String>,
    pub history: PasswordHistory,

    // Config snapshot behind the current password; when the form no longer
    // matches it, a regeneration is due
    last_config: Option<GeneratorConfig>,

    // The single expiry countdown; re-armed on every regeneration
    expiry: ExpiryTimer,

    // Clipboard notice + deferred clipboard clear
    copied_at: Option<Instant>,
    copied_what: Option<String>,

    // QR code dialog state
    pub show_qr: bool,
    qr_data: Option<(usize, Vec<bool>)>,
    qr_error: Option<String>,

    // Application settings
    pub settings: AppSettings,
    pub show_settings: bool,
    settings_regen_input: String,
    settings_clipboard_input: String,
    status_msg: String,
}

impl Default for PassForgeApp {
    fn default() -> Self {
        let settings = AppSettings::load();
        let expiry = ExpiryTimer::new(settings.regenerate_timeout_u64());
        let form = GeneratorConfig::default();
        Self {
            length: form.length,
            include_uppercase: form.include_uppercase,
            include_numbers: form.include_numbers,
            include_symbols: form.include_symbols,
            exclude_similar: form.exclude_similar,
            custom_text: form.custom_text.clone(),
            custom_position: form.custom_position,

            password: String::new(),
            generation_error: None,
            history: PasswordHistory::new(),

            last_config: None,
            expiry,

            copied_at: None,
            copied_what: None,

            show_qr: false,
            qr_data: None,
            qr_error: None,

            settings,
            show_settings: false,
            settings_regen_input: String::new(),
            settings_clipboard_input: String::new(),
            status_msg: String::new(),
        }
    }
}

impl PassForgeApp {
    pub fn new(cc: &CreationContext<'_>) -> Self {
        let app = Self::default();
        app.apply_theme(&cc.egui_ctx);
        app
    }
}

impl App for PassForgeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // Keep the countdown label ticking even without input events
        ctx.request_repaint_after(Duration::from_millis(250));

        // Clear the clipboard after the configured timeout
        if let Some(copied) = self.copied_at {
            if copied.elapsed().as_secs() >= self.settings.clipboard_timeout_u64() {
                ctx.copy_text(String::new());
                self.copied_at = None;
                self.copied_what = None;
            }
        }

        // Expired countdown: regenerate from whatever the form says right now
        if self.expiry.expired() {
            self.regenerate();
        }

        // Any form change since the last frame regenerates immediately
        let config = self.current_config();
        if self.last_config.as_ref() != Some(&config) {
            self.regenerate_with(config);
        }

        // Ctrl+G: generate a fresh password now
        if ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::G)) {
            self.regenerate();
        }

        // Escape: close any open dialog
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.show_settings = false;
            self.show_qr = false;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_widget(ui);
        });

        if self.show_settings {
            self.show_settings_window(ctx);
        }

        if self.show_qr {
            self.show_qr_window(ctx);
        }
    }
}

// ----------------------------------------------------------------
// Internal UI Implementation
// ----------------------------------------------------------------
impl PassForgeApp {
    /// The form state as a generator config.
    fn current_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            length: self.length,
            include_uppercase: self.include_uppercase,
            include_numbers: self.include_numbers,
            include_symbols: self.include_symbols,
            exclude_similar: self.exclude_similar,
            custom_text: self.custom_text.clone(),
            custom_position: self.custom_position,
        }
    }

    fn regenerate(&mut self) {
        let config = self.current_config();
        self.regenerate_with(config);
    }

    /// Generate against `config`, record the result in the history, and
    /// re-arm the countdown. On failure the previous password stays on screen.
    fn regenerate_with(&mut self, config: GeneratorConfig) {
        match generator::generate(&config) {
            Ok(password) => {
                let mut old = std::mem::replace(&mut self.password, password);
                old.zeroize();
                self.history.push(self.password.clone());
                self.generation_error = None;
                if self.show_qr {
                    self.refresh_qr();
                }
            }
            Err(err) => {
                self.generation_error = Some(err.to_string());
            }
        }
        self.last_config = Some(config);
        self.expiry.rearm(self.settings.regenerate_timeout_u64());
    }

    /// Copy text to clipboard with the transient notice and auto-clear timer
    fn copy_to_clipboard(&mut self, ctx: &egui::Context, text: &str, content_type: &str) {
        ctx.copy_text(text.to_string());
        self.copied_at = Some(Instant::now());
        self.copied_what = Some(content_type.to_string());
    }

    fn refresh_qr(&mut self) {
        match generate_qr_code_data(&self.password) {
            Ok(data) => {
                self.qr_data = Some(data);
                self.qr_error = None;
            }
            Err(e) => {
                log::warn!("QR encoding failed: {e}");
                self.qr_data = None;
                self.qr_error = Some(format!("Could not render QR code: {e}"));
            }
        }
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        if self.settings.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }
    }

    fn show_widget(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .max_width(750.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(RichText::new("Password Generator").size(22.0));
                });

                // Countdown on the left, theme toggle + settings on the right
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!("Regenerates in {}", self.expiry.format_remaining()))
                            .color(Color32::GRAY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Settings").clicked() {
                            self.settings_regen_input =
                                self.settings.regenerate_seconds.to_string();
                            self.settings_clipboard_input =
                                self.settings.clipboard_clear_seconds.to_string();
                            self.status_msg.clear();
                            self.show_settings = true;
                        }
                        let theme_label = if self.settings.dark_mode {
                            "Light mode"
                        } else {
                            "Dark mode"
                        };
                        if ui.button(theme_label).clicked() {
                            self.settings.dark_mode = !self.settings.dark_mode;
                            self.apply_theme(ui.ctx());
                            if let Err(e) = self.settings.save() {
                                log::warn!("failed to save settings: {e}");
                            }
                        }
                    });
                });

                ui.separator();

                // The generated password plus its action buttons
                ui.horizontal(|ui| {
                    ui.label("Password:");
                    ui.monospace(RichText::new(&self.password).size(16.0));
                });
                ui.horizontal(|ui| {
                    if ui.button("Copy").clicked() {
                        let text = self.password.clone();
                        self.copy_to_clipboard(ui.ctx(), &text, "Password");
                    }
                    let qr_label = if self.show_qr {
                        "Hide QR Code"
                    } else {
                        "Show QR Code"
                    };
                    if ui.button(qr_label).clicked() {
                        self.show_qr = !self.show_qr;
                        if self.show_qr {
                            self.refresh_qr();
                        }
                    }
                    if ui.button("Regenerate (Ctrl+G)").clicked() {
                        self.regenerate();
                    }
                });

                // Transient "copied" notice
                if let Some(copied) = self.copied_at {
                    if copied.elapsed().as_secs() < COPIED_NOTICE_SECONDS {
                        let remaining = self
                            .settings
                            .clipboard_timeout_u64()
                            .saturating_sub(copied.elapsed().as_secs());
                        if let Some(ref what) = self.copied_what {
                            ui.colored_label(
                                Color32::YELLOW,
                                format!("{} copied - clipboard clears in {}s", what, remaining),
                            );
                        }
                    }
                }

                if let Some(ref err) = self.generation_error {
                    ui.colored_label(Color32::RED, format!("Cannot generate: {err}"));
                }

                if !self.status_msg.is_empty() {
                    ui.colored_label(Color32::GRAY, &self.status_msg);
                }

                // Strength badge, rated against the flags that built the password
                if !self.password.is_empty() {
                    let config = self
                        .last_config
                        .clone()
                        .unwrap_or_else(|| self.current_config());
                    let rating = strength::classify(&self.password, &config);
                    ui.colored_label(
                        rating.badge_color(),
                        format!("Strength: {}", rating.label()),
                    );
                }

                ui.separator();
                ui.vertical_centered(|ui| {
                    ui.heading(RichText::new("Password Options:").size(18.0));
                });

                ui.columns(2, |cols| {
                    // Left column: length slider and class toggles
                    cols[0].with_layout(egui::Layout::top_down(egui::Align::LEFT), |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Length:");
                            ui.add(
                                egui::Slider::new(&mut self.length, MIN_LENGTH..=MAX_LENGTH)
                                    .text("chars"),
                            );
                        });
                        ui.checkbox(&mut self.include_uppercase, "Include Uppercase (A-Z)");
                        ui.checkbox(&mut self.include_numbers, "Include Numbers (0-9)");
                        ui.checkbox(&mut self.include_symbols, "Include Symbols (!@#...)");
                        ui.checkbox(&mut self.exclude_similar, "Exclude similar (O, 0, I, l, 1)");
                    });

                    // Right column: the custom text splice
                    cols[1].with_layout(egui::Layout::top_down(egui::Align::LEFT), |ui| {
                        ui.label("Custom text:");
                        ui.text_edit_singleline(&mut self.custom_text);
                        egui::ComboBox::from_label("Position")
                            .selected_text(self.custom_position.label())
                            .show_ui(ui, |ui| {
                                for position in CustomPosition::ALL {
                                    ui.selectable_value(
                                        &mut self.custom_position,
                                        position,
                                        position.label(),
                                    );
                                }
                            });
                    });
                });

                ui.separator();
                ui.vertical_centered(|ui| {
                    ui.heading(RichText::new("History").size(18.0));
                });

                if self.history.is_empty() {
                    ui.colored_label(Color32::GRAY, "No passwords yet");
                } else {
                    let mut to_copy: Option<String> = None;
                    ui.group(|ui| {
                        for entry in self.history.entries() {
                            ui.horizontal(|ui| {
                                ui.monospace(entry);
                                if ui.small_button("Copy").clicked() {
                                    to_copy = Some(entry.clone());
                                }
                            });
                        }
                    });
                    if let Some(text) = to_copy {
                        self.copy_to_clipboard(ui.ctx(), &text, "History entry");
                    }
                }
            });
    }

    fn show_settings_window(&mut self, ctx: &egui::Context) {
        egui::Window::new("Settings")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Regenerate interval (seconds, 10-300):");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.settings_regen_input)
                            .desired_width(80.0),
                    );
                });

                ui.horizontal(|ui| {
                    ui.label("Clipboard clear timeout (seconds, 10-120):");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.settings_clipboard_input)
                            .desired_width(80.0),
                    );
                });

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("Save Settings").clicked() {
                        if let Ok(regen_secs) = self.settings_regen_input.parse::<u32>() {
                            self.settings.set_regenerate_interval(regen_secs);
                        }
                        if let Ok(clipboard_secs) = self.settings_clipboard_input.parse::<u32>() {
                            self.settings.set_clipboard_timeout(clipboard_secs);
                        }
                        if let Err(e) = self.settings.save() {
                            log::warn!("failed to save settings: {e}");
                            self.status_msg = format!("Failed to save settings: {e}");
                        } else {
                            self.status_msg = "Settings saved!".into();
                        }
                        // The new interval should drive the visible countdown
                        // right away, not only after the next expiry
                        self.expiry.rearm(self.settings.regenerate_timeout_u64());
                        self.show_settings = false;
                    }
                    if ui.button("Close").clicked() {
                        self.show_settings = false;
                    }
                });

                ui.colored_label(
                    Color32::GRAY,
                    "Values outside allowed ranges will be clamped.",
                );
            });
    }

    fn show_qr_window(&mut self, ctx: &egui::Context) {
        let qr_data_clone = self.qr_data.clone();
        egui::Window::new("QR Code")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                if let Some((width, data)) = qr_data_clone {
                    // Quiet zone and module colors follow the active theme
                    let (bg, fg) = if self.settings.dark_mode {
                        (Color32::from_rgb(0x1f, 0x29, 0x37), Color32::WHITE)
                    } else {
                        (Color32::WHITE, Color32::BLACK)
                    };

                    let module_size = 4.0;
                    let qr_size = width as f32 * module_size;
                    let padding = 8.0;

                    egui::Frame::new()
                        .fill(bg)
                        .inner_margin(padding)
                        .show(ui, |ui| {
                            let (response, painter) = ui.allocate_painter(
                                egui::vec2(qr_size, qr_size),
                                egui::Sense::hover(),
                            );

                            let rect = response.rect;

                            // Draw each QR module
                            for y in 0..width {
                                for x in 0..width {
                                    let idx = y * width + x;
                                    if data.get(idx).copied().unwrap_or(false) {
                                        let module_rect = egui::Rect::from_min_size(
                                            egui::pos2(
                                                rect.min.x + x as f32 * module_size,
                                                rect.min.y + y as f32 * module_size,
                                            ),
                                            egui::vec2(module_size, module_size),
                                        );
                                        painter.rect_filled(module_rect, 0.0, fg);
                                    }
                                }
                            }
                        });

                    ui.add_space(8.0);
                    ui.colored_label(Color32::GRAY, "Scan to transfer the password.");
                } else if let Some(ref err) = self.qr_error {
                    ui.colored_label(Color32::RED, err);
                }

                ui.add_space(8.0);
                if ui.button("Close").clicked() {
                    self.show_qr = false;
                    self.qr_data = None;
                }
            });
    }
}


// Scrub sensitive fields on Drop; the history scrubs itself
impl Drop for PassForgeApp {
    fn drop(&mut self) {
        self.password.zeroize();
        self.custom_text.zeroize();
    }
}
