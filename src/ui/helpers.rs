// src/ui/helpers.rs
use crate::view_models::LeaderboardRow;
use egui::{Button, Color32, Grid, RichText, Ui, Vec2};

pub fn big_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Tabla del ranking, o un aviso si todavía está vacío.
pub fn leaderboard_grid(ui: &mut Ui, rows: &[LeaderboardRow]) {
    ui.heading("Ranking");
    ui.add_space(8.0);

    if rows.is_empty() {
        ui.label("Todavía no hay puntuaciones. ¡Sé el primero!");
        return;
    }

    Grid::new("leaderboard_grid")
        .striped(true)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            for r in rows {
                ui.label(RichText::new(format!("#{}", r.rank)).strong());
                ui.label(&r.name);
                ui.label(RichText::new(format!("{} pts", r.score)).color(Color32::LIGHT_GREEN));
                ui.label(RichText::new(&r.time).color(Color32::YELLOW));
                ui.end_row();
            }
        });
}
