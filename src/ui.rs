use egui::{Color32, RichText};
use petpal::session::{Phase, Session};

/// Light turquoise window background (also the GPU clear colour).
pub const BG_RGB: [u8; 3] = [0xE0, 0xF7, 0xFA];

const BG: Color32 = Color32::from_rgb(BG_RGB[0], BG_RGB[1], BG_RGB[2]);
const BUTTON: Color32 = Color32::from_rgb(0x00, 0xCE, 0xD1);
const BUTTON_HOVER: Color32 = Color32::from_rgb(0x00, 0x8B, 0x8B);
const QUIT: Color32 = Color32::from_rgb(0xFF, 0x45, 0x00);
const QUIT_HOVER: Color32 = Color32::from_rgb(0xCC, 0x37, 0x00);
const TEXT: Color32 = Color32::from_rgb(0x00, 0x69, 0x5C);
const STATUS_BG: Color32 = Color32::WHITE;

const BUTTON_SIZE: [f32; 2] = [100.0, 40.0];
const BUTTON_RADIUS: f32 = 20.0;

/// What the player clicked this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Start,
    Feed,
    Play,
    Quit,
}

/// Draw the whole window. Returns at most one click per frame.
pub fn draw(ctx: &egui::Context, session: &Session, name_input: &mut String) -> Option<UiAction> {
    let mut action = None;

    let frame = egui::Frame::NONE.fill(BG).inner_margin(16.0);
    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        ui.style_mut().visuals.override_text_color = Some(TEXT);

        ui.vertical_centered(|ui| {
            if let Phase::Naming = session.phase() {
                ui.add_space(8.0);
                ui.label(RichText::new("Enter your pet's name:").size(14.0));
                ui.add_space(5.0);
                let entry = ui.add(egui::TextEdit::singleline(name_input).desired_width(200.0));
                let submitted =
                    entry.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                ui.add_space(10.0);
                if rounded_button(ui, "Start", BUTTON, BUTTON_HOVER, true) || submitted {
                    action = Some(UiAction::Start);
                }
            } else {
                status_panel(ui, session);
            }

            ui.add_space(10.0);
            ui.label(RichText::new(session.message().unwrap_or("")).size(12.0));

            if let Some(face) = session.face() {
                ui.add_space(10.0);
                ui.label(RichText::new(face).monospace().size(22.0));
                ui.add_space(10.0);

                let enabled = session.actions_enabled();
                ui.horizontal(|ui| {
                    // Centre the three buttons plus spacing.
                    let row = BUTTON_SIZE[0] * 3.0 + ui.spacing().item_spacing.x * 2.0;
                    ui.add_space(((ui.available_width() - row) / 2.0).max(0.0));
                    if rounded_button(ui, "Feed", BUTTON, BUTTON_HOVER, enabled) {
                        action = Some(UiAction::Feed);
                    }
                    if rounded_button(ui, "Play", BUTTON, BUTTON_HOVER, enabled) {
                        action = Some(UiAction::Play);
                    }
                    if rounded_button(ui, "Quit", QUIT, QUIT_HOVER, true) {
                        action = Some(UiAction::Quit);
                    }
                });
            }
        });
    });

    action
}

fn status_panel(ui: &mut egui::Ui, session: &Session) {
    egui::Frame::NONE
        .fill(STATUS_BG)
        .corner_radius(6.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            for line in session.status_lines() {
                ui.label(RichText::new(line).size(14.0));
            }
        });
}

/// Filled pill-shaped button that darkens and shows a hand cursor on hover.
fn rounded_button(
    ui: &mut egui::Ui,
    text: &str,
    fill: Color32,
    hover: Color32,
    enabled: bool,
) -> bool {
    ui.scope(|ui| {
        let widgets = &mut ui.style_mut().visuals.widgets;
        widgets.inactive.weak_bg_fill = fill;
        widgets.hovered.weak_bg_fill = hover;
        widgets.active.weak_bg_fill = hover;

        let button = egui::Button::new(RichText::new(text).size(12.0).color(Color32::WHITE))
            .corner_radius(BUTTON_RADIUS)
            .min_size(egui::vec2(BUTTON_SIZE[0], BUTTON_SIZE[1]));
        ui.add_enabled(enabled, button)
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .clicked()
    })
    .inner
}
