use crate::QuizApp;
use crate::ui::helpers::big_button;
use crate::ui::layout::centered_panel;
use egui::{Align, Context, Key, Layout, RichText, TextEdit};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let Some(view) = app.quiz_view() else {
        return;
    };

    let max_width = 650.0;
    let total_height = 360.0;

    centered_panel(ctx, total_height, max_width, |ui| {
        let panel_width = ui.available_width();

        // Cabecera: progreso a la izquierda, cronómetro a la derecha
        ui.horizontal(|ui| {
            ui.label(RichText::new(view.progress_label()).strong());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new(&view.elapsed).monospace().size(20.0).strong());
            });
        });
        ui.add_space(20.0);

        ui.vertical_centered(|ui| {
            ui.label(RichText::new(format!("Para x = {}", view.x_value)).size(22.0));
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("{} = ?", view.expression))
                    .size(40.0)
                    .strong(),
            );
            ui.add_space(20.0);

            let mut enviar = false;
            if let Some(attempt) = app.attempt_mut() {
                let input = ui.add(
                    TextEdit::singleline(&mut attempt.input)
                        .hint_text("Tu respuesta")
                        .desired_width(panel_width * 0.8)
                        .font(egui::TextStyle::Heading)
                        .horizontal_align(Align::Center),
                );
                enviar = input.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
                if !input.has_focus() {
                    input.request_focus();
                }
            }

            ui.add_space(10.0);
            enviar |= big_button(ui, "Enviar", panel_width * 0.8, 40.0, true);

            if enviar {
                app.submit_pending_input();
            }
        });
    });
}
