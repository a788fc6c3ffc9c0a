use super::*;

impl QuizApp {
    /// Descarta el intento (si lo hay) y vuelve a la pantalla inicial.
    pub fn restart(&mut self) {
        if let QuizState::InProgress(attempt) = &self.state {
            log::info!(
                "{} abandona en la pregunta {}",
                attempt.player_name,
                attempt.current_index + 1
            );
        }
        self.stop_timer();
        self.state = QuizState::NotStarted;
        self.confirm_restart = false;
    }

    /// Para el cronómetro del intento en curso, si lo hay.
    pub fn stop_timer(&mut self) {
        if let QuizState::InProgress(attempt) = &mut self.state {
            attempt.timer.stop(self.clock.as_ref());
        }
    }

    pub fn confirm_restart(&mut self, ctx: &egui::Context) {
        egui::Window::new("Confirmar reinicio")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("¿Seguro que quieres abandonar este intento? No contará para el ranking.");
                ui.horizontal(|ui| {
                    if ui.button("Sí, abandonar").clicked() {
                        self.restart();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_restart = false;
                    }
                });
            });
    }
}
