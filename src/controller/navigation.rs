//! Navigation-related controller methods (themes, images, game modes)

use crate::model::FetchTicket;
use super::AppController;

impl AppController {
    /// Request the theme list in the background
    pub async fn load_themes(&self) {
        let ticket = self.model.load_themes().await;
        self.spawn_fetch(ticket);
    }

    pub async fn open_selected_theme(&self) {
        if let Some(theme) = self.model.get_selected_theme().await {
            let ticket = self.model.select_theme(theme).await;
            self.spawn_fetch(ticket);
        }
    }

    pub async fn open_selected_image(&self) {
        if let Some(image) = self.model.get_selected_image().await {
            self.model.select_image(image).await;
        }
    }

    pub async fn open_selected_game_mode(&self) {
        let Some(mode) = self.model.get_selected_game_mode().await else {
            return;
        };
        if let Some(ticket) = self.model.select_game_mode(mode).await {
            self.spawn_fetch(ticket);
        }
    }

    /// Run a fetch on its own task so the UI keeps drawing
    pub fn spawn_fetch(&self, ticket: FetchTicket) {
        let controller = self.clone();
        tokio::spawn(async move {
            controller.run_fetch(ticket).await;
        });
    }

    /// Perform the fetch a ticket describes and hand the result to the model
    pub async fn run_fetch(&self, ticket: FetchTicket) {
        tracing::debug!(kind = ?ticket.kind(), token = ticket.token(), "Running fetch");
        match ticket {
            FetchTicket::Themes { token } => {
                let result = self.api.fetch_themes().await;
                if let Ok(themes) = &result {
                    tracing::info!(count = themes.len(), "Themes loaded");
                }
                self.model.apply_themes(token, result).await;
            }
            FetchTicket::Images { token, theme_id } => {
                let result = self.api.fetch_images(&theme_id).await;
                if let Ok(images) = &result {
                    tracing::info!(theme_id = %theme_id, count = images.len(), "Images loaded");
                }
                self.model.apply_images(token, result).await;
            }
            FetchTicket::Vocabulary { token, theme_id, count } => {
                let result = self.api.fetch_vocabulary(&theme_id, count).await;
                if let Ok(items) = &result {
                    tracing::info!(theme_id = %theme_id, requested = count, count = items.len(), "Vocabulary loaded");
                }
                self.model.apply_vocabulary(token, result).await;
            }
        }
    }
}
