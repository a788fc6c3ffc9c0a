use crate::QuizApp;
use crate::ui::helpers::{big_button, leaderboard_grid};
use crate::ui::layout::centered_panel;
use egui::{Color32, Context, Grid, RichText, ScrollArea};

pub fn ui_summary_view(app: &mut QuizApp, ctx: &Context) {
    let Some(results) = app.results().cloned() else {
        return;
    };
    let rows = app.review_rows();
    let leaderboard = app.leaderboard_rows();

    let max_width = 700.0;
    let total_height = 800.0;

    centered_panel(ctx, total_height, max_width, |ui| {
        let panel_width = ui.available_width();

        ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new("¡Quiz completado!").size(30.0).strong());
                ui.add_space(10.0);

                if results.made_leaderboard {
                    ui.label(
                        RichText::new("🏆 ¡Has entrado en el ranking!")
                            .color(Color32::LIGHT_GREEN)
                            .heading()
                            .strong(),
                    );
                    ui.add_space(10.0);
                }

                ui.label("Puntuación");
                ui.label(
                    RichText::new(results.score_label())
                        .size(40.0)
                        .color(Color32::LIGHT_GREEN)
                        .strong(),
                );
                ui.add_space(6.0);
                ui.label("Tiempo total");
                ui.label(
                    RichText::new(results.time_label())
                        .size(40.0)
                        .color(Color32::YELLOW)
                        .strong(),
                );

                ui.add_space(20.0);
                ui.heading("Revisión de respuestas");
                ui.add_space(5.0);
            });

            ScrollArea::vertical()
                .id_salt("review_scroll")
                .max_height(280.0)
                .show(ui, |ui| {
                    Grid::new("review_grid")
                        .striped(true)
                        .spacing([12.0, 4.0])
                        .show(ui, |ui| {
                            ui.label("Pregunta");
                            ui.label("Tu respuesta");
                            ui.label("Respuesta correcta");
                            ui.end_row();

                            for r in &rows {
                                ui.label(r.question_label());
                                let color = if r.is_correct {
                                    Color32::LIGHT_GREEN
                                } else {
                                    Color32::LIGHT_RED
                                };
                                ui.label(RichText::new(&r.submitted).color(color).strong());
                                ui.label(RichText::new(r.correct_answer.to_string()).color(Color32::YELLOW));
                                ui.end_row();
                            }
                        });
                });

            ui.add_space(16.0);
            ui.vertical_centered(|ui| {
                if big_button(ui, "🔁 Jugar de nuevo", panel_width * 0.6, 40.0, true) {
                    app.restart();
                }
                ui.add_space(24.0);
                leaderboard_grid(ui, &leaderboard);
            });
        });
    });
}
