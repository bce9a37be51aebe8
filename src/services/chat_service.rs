use crate::{
    completion::ChatMessage,
    dto::chat::{ChatReply, ChatRequest},
    error::{AppError, AppResult},
    models::Restaurant,
    response::{ApiResponse, Meta},
    services::restaurant_service::fetch_catalog,
    state::AppState,
};

pub const CHAT_TEMPERATURE: f32 = 0.7;

pub async fn chat(state: &AppState, payload: ChatRequest) -> AppResult<ApiResponse<ChatReply>> {
    let message = payload.message.trim();
    if message.is_empty() {
        return Err(AppError::BadRequest("Message must not be empty".into()));
    }

    let catalog = fetch_catalog(&state.orm).await?;
    let messages = [
        ChatMessage::system(system_prompt(&render_catalog(&catalog))),
        ChatMessage::user(message),
    ];

    let reply = state
        .completion
        .complete(&messages, CHAT_TEMPERATURE)
        .await
        .map_err(|err| {
            tracing::warn!(error = %err, "completion request failed");
            AppError::Upstream(err.to_string())
        })?;

    Ok(ApiResponse::success(
        "Reply",
        ChatReply { reply },
        Some(Meta::empty()),
    ))
}

/// One line per restaurant: name, cuisine, location and description.
pub fn render_catalog(restaurants: &[Restaurant]) -> String {
    if restaurants.is_empty() {
        return "(no restaurants are currently listed)".to_string();
    }
    restaurants
        .iter()
        .map(|r| {
            let cuisine = r
                .cuisine
                .as_ref()
                .map_or("Unknown cuisine", |c| c.name.as_str());
            let description = r.description.as_deref().unwrap_or("No description");
            format!("- {} ({cuisine}) in {}: {description}", r.name, r.location)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn system_prompt(catalog: &str) -> String {
    format!(
        "You are Tayib's restaurant assistant. Answer using only the restaurants in the \
         catalog below. If the catalog does not answer the question, say you don't know \
         instead of guessing, and never mention restaurants that are not listed.\n\n\
         Catalog:\n{catalog}"
    )
}
