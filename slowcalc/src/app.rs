//! SlowCalc application

use egui::{Context, RichText};
use slowcalc::keypad::{self, ButtonKind, KeypadButton, KEYPAD_ROWS};
use slowcalc::settings::CalcSettings;
use slowcalc::{keyboard, Calculator, DisplayLines, Input};
use slowcore::theme::{consume_special_keys, menu_bar, SlowColors, SlowTheme};
use std::time::{Duration, Instant};

/// How long a keypad button stays inverted after its key is pressed
const KEY_FLASH: Duration = Duration::from_millis(150);

pub struct SlowCalcApp {
    calculator: Calculator<DisplayLines>,
    settings: CalcSettings,
    /// Button matching the last key press, and when it was pressed
    flash: Option<(KeypadButton, Instant)>,
    show_about: bool,
}

impl SlowCalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: CalcSettings) -> Self {
        Self {
            calculator: Calculator::new(DisplayLines::default()),
            settings,
            flash: None,
            show_about: false,
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        consume_special_keys(ctx);

        let tokens = ctx.input(|i| keyboard::tokens_from_events(&i.events));
        for token in tokens {
            let Some(input) = Input::classify(&token) else {
                tracing::debug!(token = %token, "ignored key");
                continue;
            };
            self.calculator.apply(input);
            self.flash = keypad::button_for(input).map(|button| (button, Instant::now()));
        }
    }

    /// Whether `button` is still flashing; schedules the repaint that ends it.
    fn is_flashing(&self, ctx: &Context, button: &KeypadButton) -> bool {
        match &self.flash {
            Some((flashed, at)) if flashed == button => {
                let elapsed = at.elapsed();
                if elapsed < KEY_FLASH {
                    ctx.request_repaint_after(KEY_FLASH - elapsed);
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        let lines = self.calculator.sink();
        SlowTheme::display_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                if self.settings.show_expression {
                    // keep the row height even when the trail is blank
                    let trail = if lines.expression.is_empty() {
                        " "
                    } else {
                        lines.expression.as_str()
                    };
                    ui.label(
                        RichText::new(trail)
                            .font(egui::FontId::proportional(self.settings.expression_font_size)),
                    );
                }
                ui.label(
                    RichText::new(&lines.display)
                        .font(egui::FontId::proportional(self.settings.display_font_size))
                        .strong(),
                );
            });
        });
    }

    fn render_button(
        &self,
        ui: &mut egui::Ui,
        button: &KeypadButton,
        size: egui::Vec2,
        flashing: bool,
    ) -> bool {
        let inverted = flashing || button.kind == ButtonKind::Operator;
        let mut text = RichText::new(button.label).size(18.0);
        if button.kind == ButtonKind::Number {
            text = text.strong();
        }
        let widget = if inverted {
            egui::Button::new(text.color(SlowColors::WHITE)).fill(SlowColors::BLACK)
        } else {
            egui::Button::new(text)
        };
        ui.add_sized(size, widget).clicked()
    }

    /// Draw the keypad and return the labels clicked this frame.
    fn render_keypad(&self, ui: &mut egui::Ui) -> Vec<&'static str> {
        let spacing = self.settings.button_spacing;
        let cols = KEYPAD_ROWS[0].len() as f32;
        let rows = KEYPAD_ROWS.len() as f32;
        let size = egui::vec2(
            ((ui.available_width() - spacing * (cols - 1.0)) / cols).max(24.0),
            ((ui.available_height() - spacing * (rows - 1.0)) / rows).max(24.0),
        );

        let mut clicked = Vec::new();
        ui.spacing_mut().item_spacing = egui::vec2(spacing, spacing);
        for row in 0..KEYPAD_ROWS.len() {
            ui.horizontal(|ui| {
                for button in keypad::buttons().filter(|b| b.row == row) {
                    let flashing = self.is_flashing(ui.ctx(), &button);
                    if self.render_button(ui, &button, size, flashing) {
                        clicked.push(button.label);
                    }
                }
            });
        }
        clicked
    }

    fn render_about(&mut self, ctx: &Context) {
        egui::Window::new("about calculator")
            .collapsible(false)
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("calculator");
                    ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
                    ui.add_space(4.0);
                    ui.label("calculator for slowOS");
                });
                ui.add_space(4.0);
                ui.separator();
                ui.label("keys: 0-9 . + - * / Enter");
                ui.label("  _ sign, Backspace, Del CE, Esc C");
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
    }
}

impl eframe::App for SlowCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if !self.show_about {
            self.handle_keys(ctx);
        }

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("edit", |ui| {
                    if ui.button("copy result").clicked() {
                        let text = self.calculator.display().to_string();
                        ui.ctx().output_mut(|o| o.copied_text = text);
                        ui.close_menu();
                    }
                    if ui.button("clear all").clicked() {
                        self.calculator.apply(Input::ClearAll);
                        ui.close_menu();
                    }
                });
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        let clicked = egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(SlowColors::WHITE)
                    .inner_margin(egui::Margin::same(8.0)),
            )
            .show(ctx, |ui| {
                self.render_display(ui);
                ui.add_space(8.0);
                self.render_keypad(ui)
            })
            .inner;

        for label in clicked {
            self.calculator.handle(label);
        }

        // buttons must not keep focus, or Enter would click them again
        if let Some(id) = ctx.memory(|mem| mem.focused()) {
            ctx.memory_mut(|mem| mem.surrender_focus(id));
        }

        if self.show_about {
            self.render_about(ctx);
        }
    }
}
