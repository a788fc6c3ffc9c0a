mod helpers;
pub mod layout;
pub mod views;

use crate::app::{QuizApp, QuizState};
use crate::model::Preferences;
use eframe::{APP_KEY, App, CreationContext, Frame, get_value, set_value};
use egui::{Context, Visuals};
use layout::{bottom_panel, top_panel};

impl QuizApp {
    /// Punto de entrada desde eframe: recupera las preferencias guardadas.
    pub fn from_creation_context(cc: &CreationContext<'_>) -> Self {
        let mut app = QuizApp::new();
        if let Some(prefs) = cc
            .storage
            .and_then(|storage| get_value::<Preferences>(storage, APP_KEY))
        {
            app.apply_preferences(prefs);
        }
        cc.egui_ctx.set_visuals(if app.dark_mode {
            Visuals::dark()
        } else {
            Visuals::light()
        });
        app
    }
}

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // BOTÓN SUPERIOR DE ABANDONAR (solo durante el intento)
        if self.is_in_progress() {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(self, ctx);

        // Dispatch por estado
        match self.state {
            QuizState::NotStarted => views::welcome::ui_welcome(self, ctx),
            QuizState::InProgress(_) => views::quiz::ui_quiz(self, ctx),
            QuizState::Finished(_) => views::summary::ui_summary_view(self, ctx),
        }

        if self.confirm_restart {
            self.confirm_restart(ctx);
        }

        // Cronómetro: un refresco por segundo mientras dure el intento
        if let Some(delay) = self.next_tick() {
            ctx.request_repaint_after(delay);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.preferences());
    }
}
