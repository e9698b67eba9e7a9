// src/viewer/table.rs
//
// Read-only season table. Text columns left-aligned, numbers right-aligned.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::schema::{ColumnKind, COLUMNS};

pub fn draw(ui: &mut egui::Ui, headers: &[String], rows: &[Vec<String>]) {
    egui::ScrollArea::horizontal()
        .id_salt("records_hscroll")
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .min_scrolled_height(0.0);
            for c in COLUMNS.iter() {
                let w = if c.kind == ColumnKind::Text { 110.0 } else { 56.0 };
                table = table.column(Column::initial(w).at_least(24.0).clip(true));
            }

            table
                .header(22.0, |mut header| {
                    for h in headers {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            ui.label(RichText::new(h).strong());
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, rows.len(), |mut row| {
                        let Some(cells) = rows.get(row.index()) else { return };
                        for (ci, cell) in cells.iter().enumerate() {
                            let numeric = COLUMNS.get(ci).is_some_and(|c| c.kind != ColumnKind::Text);
                            row.col(|ui| {
                                if numeric {
                                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.label(cell); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(cell); });
                                }
                            });
                        }
                    });
                });
        });
}
