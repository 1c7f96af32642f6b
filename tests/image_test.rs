use dinner_ai_rs::ai::{AiError, FakeClient, GenerateResponse, Part};
use dinner_ai_rs::error::{DinnerError, Operation};
use dinner_ai_rs::models::{
    DataUrl, DinnerTypeId, ImageSlot, ImageState, Recipe, RecipeDraft, RecipeSource,
};
use dinner_ai_rs::planner::{
    edit_in_slot, edit_recipe_image, generate_into_slot, generate_recipe_image,
};

fn recipe() -> Recipe {
    Recipe::from_draft(
        RecipeDraft {
            name: "Pumpkin risotto".to_string(),
            description: "Creamy and orange".to_string(),
            prep_time: 30,
            cost_per_person: 2.0,
            ingredients: vec![],
            instructions: vec![],
        },
        DinnerTypeId::Energetic,
        RecipeSource::Ai,
    )
}

#[tokio::test]
async fn test_generated_image_is_png_data_url() {
    let client = FakeClient::new().with_image("aGVsbG8=");

    let url = generate_recipe_image(&client, &recipe()).await.unwrap();
    assert_eq!(url.to_string(), "data:image/png;base64,aGVsbG8=");
    assert_eq!(url.decode_bytes().unwrap(), b"hello");

    let request = client.last_image_request().unwrap();
    assert!(request.prompt.contains("Pumpkin risotto"));
    assert!(request.prompt.contains("Creamy and orange"));
    assert!(request.image.is_none());
}

#[tokio::test]
async fn test_text_only_answer_means_no_image() {
    let client = FakeClient::new()
        .with_image_response(GenerateResponse::from_parts(vec![Part::text("I can't draw")]));

    let err = generate_recipe_image(&client, &recipe()).await.unwrap_err();
    assert!(matches!(err, DinnerError::NoImageReturned));
    assert_eq!(err.user_message(), Operation::Image.failure_message());
}

#[tokio::test]
async fn test_edit_sends_original_image_and_instruction() {
    let client = FakeClient::new().with_image("ZWRpdGVk");

    let edited = edit_recipe_image(&client, "data:image/jpeg;base64,b3JpZw==", "add basil")
        .await
        .unwrap();
    assert_eq!(edited, DataUrl::png("ZWRpdGVk"));

    let request = client.last_image_request().unwrap();
    assert_eq!(request.prompt, "add basil");
    let image = request.image.unwrap();
    assert_eq!(image.mime_type, "image/jpeg");
    assert_eq!(image.data, "b3JpZw==");
}

#[tokio::test]
async fn test_invalid_data_url_is_rejected_before_calling() {
    let client = FakeClient::new();

    let err = edit_recipe_image(&client, "https://example.com/dish.png", "add basil")
        .await
        .unwrap_err();
    assert!(matches!(err, DinnerError::InvalidImageFormat));
    assert_eq!(client.image_calls(), 0);
}

#[tokio::test]
async fn test_edit_without_image_in_answer() {
    let client = FakeClient::new().with_image_response(GenerateResponse::from_parts(vec![]));

    let err = edit_recipe_image(&client, "data:image/png;base64,AAAA", "brighter")
        .await
        .unwrap_err();
    assert!(matches!(err, DinnerError::NoEditedImageReturned));
}

#[tokio::test]
async fn test_slot_generate_then_edit() {
    let client = FakeClient::new().with_image("Zmlyc3Q=").with_image("c2Vjb25k");
    let mut slot = ImageSlot::default();

    generate_into_slot(&client, &mut slot, &recipe()).await;
    assert_eq!(slot.state(), &ImageState::Displayed(DataUrl::png("Zmlyc3Q=")));

    // Already showing an image: generating again does nothing
    generate_into_slot(&client, &mut slot, &recipe()).await;
    assert_eq!(client.image_calls(), 1);

    edit_in_slot(&client, &mut slot, "make it rustic").await;
    assert_eq!(slot.image(), Some(&DataUrl::png("c2Vjb25k")));
    assert!(slot.error().is_none());
    assert_eq!(client.image_calls(), 2);
}

#[tokio::test]
async fn test_failed_edit_keeps_previous_image() {
    let client = FakeClient::new()
        .with_image("Zmlyc3Q=")
        .with_image_error(AiError::RequestFailed("timeout".to_string()));
    let mut slot = ImageSlot::default();

    generate_into_slot(&client, &mut slot, &recipe()).await;
    edit_in_slot(&client, &mut slot, "add lemon").await;

    assert_eq!(slot.state(), &ImageState::Displayed(DataUrl::png("Zmlyc3Q=")));
    assert_eq!(slot.error(), Some(Operation::ImageEdit.failure_message()));
}

#[tokio::test]
async fn test_edit_on_empty_slot_is_ignored() {
    let client = FakeClient::new();
    let mut slot = ImageSlot::default();

    edit_in_slot(&client, &mut slot, "add lemon").await;
    assert_eq!(slot.state(), &ImageState::NoImage);
    assert_eq!(client.image_calls(), 0);
}

#[tokio::test]
async fn test_failed_generation_returns_to_empty() {
    let client = FakeClient::new().with_image_error(AiError::RequestFailed("down".to_string()));
    let mut slot = ImageSlot::default();

    generate_into_slot(&client, &mut slot, &recipe()).await;
    assert_eq!(slot.state(), &ImageState::NoImage);
    assert_eq!(slot.error(), Some(Operation::Image.failure_message()));
}
