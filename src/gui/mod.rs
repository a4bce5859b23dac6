use crate::api::DataClient;
use crate::controller::ControllerState;
use crate::dom::Element;
use crate::messenger::current_message;
use crate::models::Severity;
use crate::renderer::{ACTIVITY_CARD_CLASS, UNREGISTER_CLASS};
use egui::{Color32, RichText};

pub mod state;

use state::AppState;

const TITLE: &str = "Mergington High School";
const SUBTITLE: &str = "Extracurricular Activities";

pub struct SignupApp {
    state: AppState,
}

impl SignupApp {
    pub fn new<C>(cc: &eframe::CreationContext<'_>, client: C) -> Self
    where
        C: DataClient + 'static,
    {
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let ctx = cc.egui_ctx.clone();
        SignupApp {
            state: AppState::spawn(client, move || ctx.request_repaint()),
        }
    }
}

impl eframe::App for SignupApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.apply_snapshots();
        let busy = self.state.is_busy();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            egui::Frame::default()
                .outer_margin(egui::vec2(0.0, 4.0))
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading(TITLE);
                        ui.label(SUBTITLE);
                    });
                });
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Status: {}", state_label(self.state.controller_state)));
                if !self.state.worker_alive {
                    ui.colored_label(Color32::RED, "Background worker stopped");
                }
            });
        });

        egui::SidePanel::right("signup")
            .resizable(false)
            .min_width(280.0)
            .show(ctx, |ui| {
                show_signup_form(ui, &mut self.state, busy);
            });

        let mut unregister = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Available Activities");
            ui.add_space(8.0);
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for child in self.state.page.activities_list.children() {
                        paint_element(ui, child, busy, &mut unregister);
                    }
                });
        });

        if let Some((activity, email)) = unregister {
            self.state.unregister(activity, email);
        }
    }
}

fn state_label(state: ControllerState) -> &'static str {
    match state {
        ControllerState::Loading => "Loading",
        ControllerState::Rendered { load_failed: false } => "Ready",
        ControllerState::Rendered { load_failed: true } => "Offline",
        ControllerState::Submitting => "Submitting",
        ControllerState::ErrorShown => "Ready",
    }
}

fn show_signup_form(ui: &mut egui::Ui, state: &mut AppState, busy: bool) {
    ui.add_space(8.0);
    ui.heading("Sign Up for an Activity");
    ui.add_space(8.0);

    ui.label("Student Email:");
    let email = ui.add(
        egui::TextEdit::singleline(&mut state.email).hint_text("your-email@mergington.edu"),
    );
    let mut submit = email.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    ui.add_space(4.0);
    ui.label("Select Activity:");
    let options: Vec<(String, String)> = state
        .page
        .activity_select()
        .children()
        .iter()
        .map(|option| (option.value().to_owned(), option.text().to_owned()))
        .collect();
    let selected_text = options
        .iter()
        .find(|(value, _)| *value == state.selected_activity)
        .map(|(_, text)| text.clone())
        .unwrap_or_default();
    egui::ComboBox::from_id_salt("activity")
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            for (value, text) in options {
                ui.selectable_value(&mut state.selected_activity, value, text);
            }
        });

    ui.add_space(8.0);
    submit |= ui.add_enabled(!busy, egui::Button::new("Sign Up")).clicked();
    if submit && !busy {
        state.submit();
    }

    ui.add_space(12.0);
    show_banner(ui, &state.page.message);
}

fn show_banner(ui: &mut egui::Ui, banner: &Element) {
    let Some(message) = current_message(banner) else {
        return;
    };
    let (fill, text) = match message.severity {
        Severity::Info => (Color32::from_rgb(227, 242, 253), Color32::from_rgb(13, 71, 161)),
        Severity::Success => (Color32::from_rgb(232, 245, 233), Color32::from_rgb(27, 94, 32)),
        Severity::Error => (Color32::from_rgb(255, 235, 238), Color32::from_rgb(183, 28, 28)),
    };
    egui::Frame::none()
        .fill(fill)
        .inner_margin(8.0)
        .rounding(4.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.colored_label(text, message.text.as_str());
        });
}

/// Paints one rendered element. Unregister clicks are reported through `unregister`.
fn paint_element(
    ui: &mut egui::Ui,
    el: &Element,
    busy: bool,
    unregister: &mut Option<(String, String)>,
) {
    match el.tag() {
        "div" if el.has_class(ACTIVITY_CARD_CLASS) => {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                for child in el.children() {
                    paint_element(ui, child, busy, unregister);
                }
            });
            ui.add_space(8.0);
        }
        "div" | "ul" => {
            for child in el.children() {
                paint_element(ui, child, busy, unregister);
            }
        }
        "li" => {
            ui.horizontal(|ui| {
                for child in el.children() {
                    paint_element(ui, child, busy, unregister);
                }
            });
        }
        "h4" => {
            ui.label(RichText::new(el.text()).heading());
        }
        "h5" => {
            ui.label(RichText::new(el.text()).strong());
        }
        "span" if el.has_class("avatar") => {
            ui.label(
                RichText::new(format!(" {} ", el.text()))
                    .monospace()
                    .strong()
                    .color(Color32::WHITE)
                    .background_color(Color32::from_rgb(92, 107, 192)),
            );
        }
        "button" if el.has_class(UNREGISTER_CLASS) => {
            let clicked = ui
                .add_enabled(!busy, egui::Button::new(el.text()).small())
                .clicked();
            if clicked {
                if let (Some(activity), Some(email)) =
                    (el.attribute("data-activity"), el.attribute("data-email"))
                {
                    *unregister = Some((activity.to_owned(), email.to_owned()));
                }
            }
        }
        _ => {
            ui.label(el.text_content());
        }
    }
}
