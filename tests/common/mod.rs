#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tayib_api::{
    completion::{ChatMessage, CompletionClient, CompletionError},
    db::{create_orm_conn, run_migrations},
    dto::{
        auth::RegisterRequest, cuisines::CreateCuisineRequest,
        restaurants::CreateRestaurantRequest,
    },
    models::{Cuisine, Restaurant, User},
    services::{auth_service, catalog_service, restaurant_service},
    state::AppState,
};

/// Completion client that records every call instead of reaching the network.
#[derive(Default)]
pub struct RecordingCompletion {
    pub calls: Mutex<Vec<(Vec<ChatMessage>, f32)>>,
    pub fail_with: Option<String>,
}

impl RecordingCompletion {
    pub fn failing(message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionClient for RecordingCompletion {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
    ) -> Result<String, CompletionError> {
        self.calls
            .lock()
            .unwrap()
            .push((messages.to_vec(), temperature));
        match &self.fail_with {
            Some(message) => Err(CompletionError::Malformed(message.clone())),
            None => Ok("Barbar is open late.".to_string()),
        }
    }
}

pub async fn setup_state() -> anyhow::Result<(AppState, Arc<RecordingCompletion>)> {
    setup_state_with(RecordingCompletion::default()).await
}

pub async fn setup_state_with(
    completion: RecordingCompletion,
) -> anyhow::Result<(AppState, Arc<RecordingCompletion>)> {
    let orm = create_orm_conn("sqlite::memory:").await?;
    run_migrations(&orm).await?;
    let completion = Arc::new(completion);
    let state = AppState {
        orm,
        completion: completion.clone(),
    };
    Ok((state, completion))
}

pub async fn register(
    state: &AppState,
    username: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<User> {
    let resp = auth_service::register_user(
        state,
        RegisterRequest {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            is_restaurant: false,
        },
    )
    .await?;
    Ok(resp.data.expect("user"))
}

pub async fn create_cuisine(state: &AppState, name: &str) -> anyhow::Result<Cuisine> {
    let resp = catalog_service::create_cuisine(
        state,
        CreateCuisineRequest {
            name: name.into(),
            image_url: None,
        },
    )
    .await?;
    Ok(resp.data.expect("cuisine"))
}

pub async fn create_restaurant(
    state: &AppState,
    name: &str,
    cuisine_id: Option<i32>,
) -> anyhow::Result<Restaurant> {
    let resp = restaurant_service::create_restaurant(
        state,
        CreateRestaurantRequest {
            name: name.into(),
            location: "Hamra, Beirut".into(),
            image_url: None,
            rating: 4.0,
            description: Some(format!("{name} description")),
            latitude: 33.8963,
            longitude: 35.4805,
            cuisine_id,
        },
    )
    .await?;
    Ok(resp.data.expect("restaurant"))
}
