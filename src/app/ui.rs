use super::{Notice, Refresh, SarasTutor};
use crate::upload::{UploadedFile, PDF_MIME};
use crate::utils::color::ColorExt;
use crate::utils::file_size::FileSizeUtils;
use eframe::egui::{self, Align, Color32, RichText};
use rfd::FileDialog;
use std::path::PathBuf;

const SUCCESS_GREEN: Color32 = Color32::from_rgb(0, 180, 0);
const WARNING_RED: Color32 = Color32::from_rgb(220, 50, 50);

fn file_icon_and_color(mime_type: &str) -> (&'static str, Color32) {
    if mime_type == PDF_MIME {
        ("📄", Color32::from_hex("#dc3545").unwrap_or(Color32::RED))
    } else {
        ("📊", Color32::from_hex("#28a745").unwrap_or(Color32::GREEN))
    }
}

impl SarasTutor {
    pub fn render(&mut self, ctx: &egui::Context) -> Refresh {
        let mut refresh = Refresh::NotNeeded;

        egui::CentralPanel::default().show(ctx, |ui| {
            let total_height = ui.available_height();
            let footer_height = 40.0;
            let footer_margin = 15.0;
            let content_height = total_height - footer_height - footer_margin;

            egui::ScrollArea::vertical()
                .max_height(content_height)
                .show(ui, |ui| {
                    ui.add_space(20.0);
                    self.render_header(ui);

                    ui.add_space(20.0);
                    self.render_statistics(ui);

                    ui.add_space(20.0);
                    if let Some(paths) = self.render_upload_section(ui) {
                        refresh = refresh.or(self.handle_picked_files(paths));
                    }

                    ui.add_space(20.0);
                    if self.store.is_empty() {
                        self.render_empty_state(ui);
                    } else {
                        if let Some(index) = self.render_file_list(ui) {
                            refresh = refresh.or(self.delete_file(index));
                        }

                        ui.add_space(20.0);
                        refresh = refresh.or(self.render_action_buttons(ui));
                    }

                    self.render_notice(ui);
                    ui.add_space(20.0);
                });

            ui.with_layout(egui::Layout::bottom_up(Align::Center), |ui| {
                ui.add_space(footer_margin);
                self.render_footer(ui);
            });
        });

        refresh
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading("🎓 Saras AI Tutor");
            ui.add_space(5.0);
            ui.label(
                RichText::new(
                    "Transform your presentations into interactive learning experiences",
                )
                .color(ui.visuals().text_color().gamma_multiply(0.7)),
            );
        });
    }

    fn render_statistics(&self, ui: &mut egui::Ui) {
        let stats = self.store.stats();

        ui.columns(3, |cols| {
            Self::render_stat_box(&mut cols[0], stats.total, "Files Uploaded");
            Self::render_stat_box(&mut cols[1], stats.pdf_count, "PDF Files");
            Self::render_stat_box(&mut cols[2], stats.other_count, "PPTX Files");
        });
    }

    fn render_stat_box(ui: &mut egui::Ui, value: usize, label: &str) {
        ui.group(|ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(value.to_string()).size(28.0).strong());
                ui.label(
                    RichText::new(label).color(ui.visuals().text_color().gamma_multiply(0.7)),
                );
            });
        });
    }

    fn render_upload_section(&mut self, ui: &mut egui::Ui) -> Option<Vec<PathBuf>> {
        let mut picked = None;

        ui.group(|ui| {
            ui.label(RichText::new("📁 Upload Your Files").strong());
            ui.label("Pick your PPTX or PDF files. You can select several at once.");
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("📂 Choose Files").clicked() {
                    picked = FileDialog::new()
                        .add_filter("Presentations", &["pdf", "pptx"])
                        .pick_files();
                }
                ui.label(
                    RichText::new("Files already in the session are skipped, not replaced.")
                        .color(ui.visuals().text_color().gamma_multiply(0.6)),
                );
            });
        });

        picked
    }

    /// Renders one row per entry; returns the index of a row whose delete
    /// button was clicked this frame.
    fn render_file_list(&mut self, ui: &mut egui::Ui) -> Option<usize> {
        let mut pending_delete = None;

        ui.label(RichText::new("📚 Your Uploaded Files").strong());
        ui.add_space(8.0);

        for (i, entry) in self.store.entries().iter().enumerate() {
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    Self::render_file_row(ui, entry);

                    ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                        if ui.button("🗑").on_hover_text("Delete file").clicked() {
                            pending_delete = Some(i);
                        }
                    });
                });
            });
            ui.add_space(4.0);
        }

        pending_delete
    }

    fn render_file_row(ui: &mut egui::Ui, entry: &UploadedFile) {
        let (icon, type_color) = file_icon_and_color(&entry.mime_type);
        let type_tag = entry
            .mime_type
            .rsplit('/')
            .next()
            .unwrap_or(&entry.mime_type)
            .to_uppercase();

        ui.label(RichText::new(icon).size(20.0));
        ui.label(RichText::new(&entry.name).strong());
        ui.colored_label(type_color, type_tag);
        ui.label(
            RichText::new(format!("📏 {}", FileSizeUtils::format_size(entry.size_bytes)))
                .color(ui.visuals().text_color().gamma_multiply(0.6)),
        );
    }

    fn render_empty_state(&self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.label(RichText::new("📁").size(40.0));
                ui.label(RichText::new("No files uploaded yet").strong());
                ui.label(
                    "Upload your first presentation or PDF to get started with AI-powered lectures!",
                );
                ui.add_space(10.0);
            });
        });
    }

    fn render_action_buttons(&mut self, ui: &mut egui::Ui) -> Refresh {
        let mut refresh = Refresh::NotNeeded;

        ui.vertical_centered(|ui| {
            ui.label(RichText::new("🚀 Ready to Start?").strong());
            ui.add_space(8.0);

            let generate = egui::Button::new("✨ Generate Lecture")
                .min_size(egui::vec2(200.0, 40.0))
                .fill(Color32::from_rgb(161, 89, 225));
            if ui.add(generate).clicked() {
                refresh = refresh.or(self.generate_lecture());
            }

            ui.add_space(5.0);
            if ui.button("🧹 Clear All Files").clicked() {
                refresh = refresh.or(self.clear_all_files());
            }
        });

        refresh
    }

    fn render_notice(&self, ui: &mut egui::Ui) {
        if let Some(notice) = &self.state.notice {
            ui.add_space(10.0);
            ui.vertical_centered(|ui| match notice {
                Notice::Success(msg) => {
                    ui.colored_label(SUCCESS_GREEN, msg);
                }
                Notice::Warning(msg) => {
                    ui.colored_label(WARNING_RED, msg);
                }
            });
        }
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("💡 Tip: Upload multiple files to create comprehensive lecture series")
                    .color(ui.visuals().text_color().gamma_multiply(0.6)),
            );
            ui.horizontal_centered(|ui| {
                ui.label("Made with");
                ui.colored_label(Color32::from_rgb(161, 89, 225), "♥");
                ui.label("using egui");
            });
        });
    }
}
