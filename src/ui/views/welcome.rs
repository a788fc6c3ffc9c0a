use crate::QuizApp;
use crate::timer::format_time;
use crate::ui::helpers::{big_button, leaderboard_grid};
use crate::ui::layout::centered_panel;
use egui::{Context, Key, RichText, TextEdit};

pub fn ui_welcome(app: &mut QuizApp, ctx: &Context) {
    let max_width = 540.0;
    let estimated_h = 520.0;

    centered_panel(ctx, estimated_h, max_width, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Algebra Speed Test").size(32.0).strong());
            ui.add_space(10.0);
            ui.label(format!(
                "Escribe tu nombre y pon a prueba tu álgebra. ¡Termina en menos de {} para entrar en el ranking!",
                format_time(app.leaderboard.max_time_secs())
            ));
            ui.add_space(18.0);

            let btn_w = (ui.available_width() * 0.9).clamp(120.0, 400.0);
            let btn_h = 40.0;

            let name_field = ui.add(
                TextEdit::singleline(&mut app.name_input)
                    .hint_text("Tu nombre")
                    .desired_width(btn_w)
                    .horizontal_align(egui::Align::Center),
            );
            let enter = name_field.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

            ui.add_space(8.0);
            let clicked = big_button(ui, "▶ Empezar", btn_w, btn_h, app.can_start());

            // Con el nombre vacío el botón está deshabilitado y Enter no hace nada
            if (clicked || enter) && app.can_start() {
                let name = app.name_input.clone();
                app.start(&name);
            }

            ui.add_space(24.0);
            leaderboard_grid(ui, &app.leaderboard_rows());
        });
    });
}
