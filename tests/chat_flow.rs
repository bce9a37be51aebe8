mod common;

use tayib_api::{
    completion::Role,
    dto::chat::ChatRequest,
    error::AppError,
    services::chat_service::{self, CHAT_TEMPERATURE},
};

use common::{RecordingCompletion, create_cuisine, create_restaurant, setup_state, setup_state_with};

#[tokio::test]
async fn blank_message_is_rejected_without_calling_upstream() -> anyhow::Result<()> {
    let (state, completion) = setup_state().await?;

    for message in ["", "   ", "\n\t"] {
        let err = chat_service::chat(
            &state,
            ChatRequest {
                message: message.into(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
    assert_eq!(completion.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn message_is_sent_with_catalog_prompt() -> anyhow::Result<()> {
    let (state, completion) = setup_state().await?;
    let lebanese = create_cuisine(&state, "Lebanese").await?;
    create_restaurant(&state, "Barbar", Some(lebanese.id)).await?;
    create_restaurant(&state, "Kalei", None).await?;

    let resp = chat_service::chat(
        &state,
        ChatRequest {
            message: "  Where can I eat shawarma late?  ".into(),
        },
    )
    .await?;
    assert_eq!(resp.data.unwrap().reply, "Barbar is open late.");

    let calls = completion.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (messages, temperature) = &calls[0];
    assert_eq!(*temperature, CHAT_TEMPERATURE);
    assert_eq!(messages.len(), 2);

    assert_eq!(messages[0].role, Role::System);
    assert!(messages[0]
        .content
        .contains("- Barbar (Lebanese) in Hamra, Beirut: Barbar description"));
    assert!(messages[0]
        .content
        .contains("- Kalei (Unknown cuisine) in Hamra, Beirut: Kalei description"));

    assert_eq!(messages[1].role, Role::User);
    assert_eq!(messages[1].content, "Where can I eat shawarma late?");
    Ok(())
}

#[tokio::test]
async fn upstream_failure_surfaces_detail() -> anyhow::Result<()> {
    let (state, completion) =
        setup_state_with(RecordingCompletion::failing("quota exceeded")).await?;

    let err = chat_service::chat(
        &state,
        ChatRequest {
            message: "Any vegan places?".into(),
        },
    )
    .await
    .unwrap_err();
    match err {
        AppError::Upstream(detail) => assert!(detail.contains("quota exceeded")),
        other => panic!("expected upstream error, got {other:?}"),
    }
    assert_eq!(completion.call_count(), 1);
    Ok(())
}
