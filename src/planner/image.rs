use crate::ai::{AiClient, GenerateResponse, ImageRequest, InlineData};
use crate::error::{DinnerError, Operation, Result};
use crate::models::{DataUrl, ImageSlot, Recipe};

/// Photographic description of a recipe's finished dish.
pub fn image_prompt(recipe: &Recipe) -> String {
    format!(
        "Photograph of a plate of \"{}\". Description: \"{}\". The photo must be appetising, \
         home-style, well lit, professionally framed and realistic. The dish is the hero and the \
         background is simple.",
        recipe.name, recipe.description
    )
}

/// First inline image of the response as a PNG data URL.
fn extract_image(response: &GenerateResponse) -> Option<DataUrl> {
    response
        .first_inline_data()
        .map(|inline| DataUrl::png(inline.data.clone()))
}

async fn request_image(
    client: &dyn AiClient,
    request: ImageRequest,
    operation: Operation,
) -> Result<GenerateResponse> {
    client.generate_image(request).await.map_err(|source| {
        tracing::error!(operation = %operation, error = %source, "AI image call failed");
        DinnerError::GenerationFailed { operation, source }
    })
}

/// Generate a photo of the dish.
pub async fn generate_recipe_image(client: &dyn AiClient, recipe: &Recipe) -> Result<DataUrl> {
    let request = ImageRequest {
        prompt: image_prompt(recipe),
        image: None,
    };
    let response = request_image(client, request, Operation::Image).await?;

    extract_image(&response).ok_or_else(|| {
        tracing::error!(recipe = %recipe.id, "Image response carried no inline image");
        DinnerError::NoImageReturned
    })
}

/// Edit an existing image following a free-text instruction.
///
/// A malformed data URL is rejected before the model is called.
pub async fn edit_recipe_image(
    client: &dyn AiClient,
    existing: &str,
    edit_prompt: &str,
) -> Result<DataUrl> {
    let source: DataUrl = existing.parse()?;

    let request = ImageRequest {
        prompt: edit_prompt.to_string(),
        image: Some(InlineData {
            mime_type: source.mime_type,
            data: source.data,
        }),
    };
    let response = request_image(client, request, Operation::ImageEdit).await?;

    extract_image(&response).ok_or_else(|| {
        tracing::error!("Image edit response carried no inline image");
        DinnerError::NoEditedImageReturned
    })
}

/// Run image generation through a widget slot. Ignored while the slot is busy
/// or already shows an image.
pub async fn generate_into_slot(client: &dyn AiClient, slot: &mut ImageSlot, recipe: &Recipe) {
    if !slot.begin_generate() {
        return;
    }
    let outcome = generate_recipe_image(client, recipe).await;
    slot.finish(outcome);
}

/// Run an edit of the slot's current image. Ignored unless an image is shown
/// and no other operation is in flight.
pub async fn edit_in_slot(client: &dyn AiClient, slot: &mut ImageSlot, edit_prompt: &str) {
    if !slot.begin_edit() {
        return;
    }
    let current = slot.image().map(ToString::to_string).unwrap_or_default();
    let outcome = edit_recipe_image(client, &current, edit_prompt).await;
    slot.finish(outcome);
}
