use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::interaction::InteractionDto,
    server::{
        error::AppError, model::interaction::Interaction,
        service::interaction::InteractionService, state::AppState,
    },
};

/// Webhook Discord POSTs interactions to.
///
/// Runs behind `verify_signature`, so the payload is known to come from Discord.
pub async fn interactions(
    State(state): State<AppState>,
    Json(payload): Json<InteractionDto>,
) -> Result<impl IntoResponse, AppError> {
    let interaction = Interaction::try_from(payload)?;

    let service = InteractionService::new(
        state.discord.as_ref(),
        state.accounts.as_ref(),
        &state.directory,
        &state.admin_role_name,
    );

    let response = service.handle(interaction).await?;

    Ok((StatusCode::OK, Json(response)))
}
