use eframe::egui::{self, Color32, RichText};
use eframe::egui::{FontData, FontDefinitions, FontFamily};

use crate::model::{AppState, UiAction};
use product_form_common::{labels, Field, ImageCell, ProductFormState};

const FIELDS: &[(Field, &str, &str)] = &[
    (Field::Name, labels::NAME_LABEL, labels::NAME_LABEL),
    (Field::Price, labels::PRICE_LABEL, labels::PRICE_LABEL),
    (Field::Image, labels::IMAGE_LABEL, labels::IMAGE_PLACEHOLDER),
];

const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
const DANGER: Color32 = Color32::from_rgb(239, 68, 68);

#[derive(Default)]
pub struct DesktopApp {
    state: AppState,
}

impl DesktopApp {
    pub fn new(form: ProductFormState) -> Self {
        Self {
            state: AppState::new(form),
        }
    }

    fn render_form(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        ui.horizontal(|ui| {
            for (field, label, hint) in FIELDS {
                ui.vertical(|ui| {
                    ui.label(RichText::new(*label).color(Color32::from_gray(200)));
                    let mut text = self.state.form.form().get(*field).to_string();
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut text)
                            .hint_text(*hint)
                            .desired_width(200.0),
                    );
                    if response.changed() {
                        actions.push(UiAction::Edit(*field, text));
                    }
                });
            }
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.add(egui::Button::new(RichText::new(labels::SAVE_BUTTON).color(Color32::WHITE)).fill(ACCENT)).clicked() {
                actions.push(UiAction::Save);
            }
            if ui.button(labels::CLEAR_BUTTON).clicked() {
                actions.push(UiAction::Clear);
            }
        });
    }

    fn render_table(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        let rows = self.state.form.rows();

        egui::Grid::new("product_table")
            .striped(true)
            .min_col_width(60.0)
            .spacing([16.0, 8.0])
            .show(ui, |ui| {
                for header in labels::TABLE_HEADERS {
                    ui.label(RichText::new(header).strong());
                }
                ui.end_row();

                if rows.is_empty() {
                    ui.label(RichText::new(labels::EMPTY_TABLE).color(Color32::from_gray(140)));
                    ui.end_row();
                    return;
                }

                for row in &rows {
                    ui.label(row.position.to_string());
                    ui.label(&row.name);
                    ui.label(&row.price);
                    match &row.image {
                        ImageCell::Url(url) => {
                            ui.hyperlink_to(truncate(url, 32), url);
                        }
                        ImageCell::Missing => {
                            ui.label(labels::NO_IMAGE);
                        }
                    }
                    if ui.add(egui::Button::new(RichText::new(labels::DELETE_BUTTON).color(Color32::WHITE)).fill(DANGER)).clicked() {
                        actions.push(UiAction::RequestDelete(row.id));
                    }
                    ui.end_row();
                }
            });
    }

    fn render_modals(&self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        if let Some(message) = &self.state.notice {
            egui::Window::new("notice")
                .title_bar(false)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(RichText::new(message).size(16.0));
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        actions.push(UiAction::DismissNotice);
                    }
                });
        }

        if self.state.form.gate().is_open() {
            egui::Window::new("confirm_delete")
                .title_bar(false)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(RichText::new(labels::DELETE_QUESTION).strong().size(16.0));
                    if let Some(product) = self.state.form.pending_product() {
                        ui.label(RichText::new(&product.name).color(Color32::from_gray(170)));
                    }
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        if ui.add(egui::Button::new(RichText::new(labels::CONFIRM_BUTTON).color(Color32::WHITE)).fill(DANGER)).clicked() {
                            actions.push(UiAction::ConfirmDelete);
                        }
                        if ui.button(labels::CANCEL_BUTTON).clicked() {
                            actions.push(UiAction::CancelDelete);
                        }
                    });
                });
        }
    }
}

pub fn configure_fonts(ctx: &egui::Context) {
    let mut fonts = FontDefinitions::default();
    let candidates = [
        r"C:\Windows\Fonts\tahoma.ttf",
        r"C:\Windows\Fonts\LeelawUI.ttf",
        "/System/Library/Fonts/Thonburi.ttc",
        "/usr/share/fonts/truetype/noto/NotoSansThai-Regular.ttf",
        "/usr/share/fonts/truetype/tlwg/Garuda.ttf",
    ];

    for path in candidates {
        if let Ok(data) = std::fs::read(path) {
            fonts.font_data.insert("thai_fallback".to_string(), FontData::from_owned(data));
            fonts.families
                .entry(FontFamily::Proportional)
                .or_default()
                .push("thai_fallback".to_string());
            fonts.families
                .entry(FontFamily::Monospace)
                .or_default()
                .push("thai_fallback".to_string());
            ctx.set_fonts(fonts);
            return;
        }
    }
    tracing::warn!("no Thai font found; labels may not render");
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{head}…")
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();
        let modal_open = self.state.is_modal_open();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!modal_open, |ui| {
                ui.heading(RichText::new(labels::PAGE_TITLE).color(ACCENT));
                ui.separator();
                self.render_form(ui, &mut actions);
                ui.add_space(16.0);
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.render_table(ui, &mut actions);
                    });
            });
        });

        self.render_modals(ctx, &mut actions);

        for action in actions {
            self.state.apply(action);
        }
    }
}
