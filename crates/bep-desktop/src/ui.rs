//! Screen layouts: front page with signal tiles, detail page with the scope

use bep_core::{catalog, ContentBundle, SignalKind};
use egui::{Color32, Margin, RichText, Rounding, Sense, Stroke, Vec2};

use crate::app::DetailScreen;
use crate::scope::{self, ScopeConfig};

const TITLE_COLOR: Color32 = Color32::from_rgb(179, 153, 255);
const HINT_COLOR: Color32 = Color32::from_rgb(255, 125, 50);
const TILE_TEXT_COLOR: Color32 = Color32::from_rgb(65, 105, 255);
const TILE_STROKE_COLOR: Color32 = Color32::from_rgb(210, 210, 215);
const DETAIL_BACKGROUND: Color32 = Color32::from_rgb(120, 125, 123);

const HINT_TEXT: &str = "Click to learn more about your potentials.";

/// Show the front page. Returns the signal whose tile was clicked, if any.
pub fn front_screen(ctx: &egui::Context, content: &ContentBundle) -> Option<SignalKind> {
    let mut selected = None;

    egui::CentralPanel::default()
        .frame(
            egui::Frame::default()
                .fill(Color32::WHITE)
                .inner_margin(Margin::same(10.0)),
        )
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(6.0);
                ui.label(
                    RichText::new(&content.title)
                        .size(30.0)
                        .strong()
                        .color(TITLE_COLOR),
                );
                ui.add_space(8.0);
                ui.label(
                    RichText::new(&content.introduction)
                        .size(14.0)
                        .color(Color32::BLACK),
                );
                ui.add_space(14.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(HINT_TEXT).size(14.0).color(HINT_COLOR));
                });
                ui.add_space(14.0);

                // 2x2 tile grid: ECG EEG / EMG EOG
                ui.columns(2, |columns| {
                    for (i, kind) in SignalKind::ALL.iter().enumerate() {
                        let column = &mut columns[i % 2];
                        if signal_tile(column, *kind, content).clicked() {
                            selected = Some(*kind);
                        }
                        column.add_space(12.0);
                    }
                });
            });
        });

    selected
}

/// One selectable signal card: waveform preview, code and brief intro.
/// Identity travels with the `SignalKind` tag, never with the caption text.
fn signal_tile(ui: &mut egui::Ui, kind: SignalKind, content: &ContentBundle) -> egui::Response {
    let brief = content
        .info(kind.code())
        .map(|info| info.brief_intro.clone())
        .unwrap_or_default();

    let frame = egui::Frame::default()
        .fill(Color32::WHITE)
        .rounding(Rounding::same(14.0))
        .stroke(Stroke::new(1.0, TILE_STROKE_COLOR))
        .inner_margin(Margin::same(8.0))
        .show(ui, |ui| {
            let preview_size = Vec2::new(ui.available_width(), 70.0);
            let (response, painter) = ui.allocate_painter(preview_size, Sense::hover());
            scope::paint_fitted(
                &painter,
                response.rect,
                catalog::points(kind),
                &ScopeConfig::default(),
            );

            ui.add_space(6.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(kind.code())
                        .size(16.0)
                        .strong()
                        .color(TILE_TEXT_COLOR),
                );
                ui.label(RichText::new(brief).size(12.0).color(TILE_TEXT_COLOR));
            });
        });

    let rect = frame.response.rect;
    ui.interact(rect, ui.id().with(kind.code()), Sense::click())
}

/// Show the detail page for one signal. Returns true when the back action
/// was triggered.
pub fn detail_screen(ctx: &egui::Context, detail: &DetailScreen) -> bool {
    let mut back = false;
    let config = ScopeConfig::default();

    egui::CentralPanel::default()
        .frame(
            egui::Frame::default()
                .fill(DETAIL_BACKGROUND)
                .inner_margin(Margin::same(5.0)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Back").clicked() {
                    back = true;
                }
                ui.add_space(80.0);
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(detail.kind.code())
                            .size(25.0)
                            .strong()
                            .color(Color32::BLACK),
                    );
                    ui.label(
                        RichText::new(detail.kind.full_name())
                            .size(12.0)
                            .color(Color32::from_gray(40)),
                    );
                });
            });
            ui.add_space(8.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                paragraph(ui, &detail.info.detail_1);
                ui.add_space(10.0);

                // The live scope replaying the sample trace
                scope::show(ui, &config, detail.animator.playback().drawn());
                ui.add_space(10.0);

                paragraph(ui, &detail.info.detail_2);
                ui.add_space(10.0);

                // Static portrait of the whole waveform
                scope::show(ui, &config, detail.animator.playback().points());
                ui.add_space(10.0);

                paragraph(ui, &detail.info.detail_3);
                ui.add_space(20.0);
            });
        });

    back
}

fn paragraph(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).size(18.0).color(Color32::WHITE));
}
