//! Drives the editor against a real template service on a local port.

use std::sync::Arc;

use ebuilder_api::config::{ServerConfig, StoreBackend};
use ebuilder_api::router::build_app_router;
use ebuilder_api::state::AppState;
use ebuilder_core::template::Alignment;
use ebuilder_db::MemoryTemplateStore;
use ebuilder_editor::{DragResult, Editor, HttpTemplateClient, Section, TemplateApi};
use tempfile::TempDir;

const LAYOUT: &str = "<h1>{{title}}</h1><img src=\"{{imageUrl}}\"><p>{{content}}</p>";

/// Start the service on an ephemeral port, returning its base URL.
async fn spawn_service(dir: &TempDir) -> String {
    let layout_path = dir.path().join("layout.html");
    std::fs::write(&layout_path, LAYOUT).unwrap();

    let config = ServerConfig {
        host: "127.0.0.1".into(),
        port: 0,
        cors_origins: vec!["*".into()],
        request_timeout_secs: 30,
        store_backend: StoreBackend::Memory,
        database_url: None,
        upload_dir: dir.path().join("uploads"),
        layout_path,
        max_upload_bytes: 1024 * 1024,
    };
    let state = AppState::new(Arc::new(MemoryTemplateStore::new()), config);
    let app = build_app_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn compose_save_reload_and_download() {
    let dir = tempfile::tempdir().unwrap();
    let base_url = spawn_service(&dir).await;
    let editor = Editor::new(HttpTemplateClient::new(base_url.clone()));

    editor.refresh_templates().await;
    assert!(editor.snapshot().templates.is_empty());

    // Compose a new template.
    editor.set_title("Launch");
    editor.set_content("We are live.");
    editor.set_alignment(Alignment::Center);
    editor.upload_image("hero.png", b"png-bytes".to_vec()).await;
    editor.reorder_sections(DragResult {
        source: 0,
        destination: Some(2),
    });

    let state = editor.snapshot();
    let image_url = state.draft.image_url.clone().unwrap();
    assert!(image_url.starts_with("/uploads/") && image_url.ends_with("-hero.png"));
    assert_eq!(state.sections, [Section::Image, Section::Content, Section::Title]);

    // The uploaded file is served back.
    let served = reqwest::get(format!("{base_url}{image_url}"))
        .await
        .unwrap()
        .bytes()
        .await
        .unwrap();
    assert_eq!(&served[..], b"png-bytes");

    // Save creates it and refreshes the list.
    editor.save().await;
    let state = editor.snapshot();
    assert_eq!(state.templates.len(), 1);
    assert!(state.notice.is_some());
    let id = state.templates[0].id;

    // Select it fresh and update.
    editor.select_template(None).await;
    assert_eq!(editor.snapshot().draft.title.as_deref(), Some(""));
    editor.select_template(Some(id)).await;
    assert_eq!(editor.snapshot().draft.title.as_deref(), Some("Launch"));

    editor.set_title("Launch day");
    editor.save().await;
    let reloaded = editor.client().get_template(id).await.unwrap();
    assert_eq!(reloaded.payload.title.as_deref(), Some("Launch day"));
    assert_eq!(
        reloaded.payload.styles.unwrap().alignment,
        Some(Alignment::Center)
    );

    // Download renders through the layout.
    let download = editor.download().await.unwrap();
    assert_eq!(download.filename, "email-template.html");
    assert_eq!(
        download.body,
        format!("<h1>Launch day</h1><img src=\"{image_url}\"><p>We are live.</p>")
    );

    let saved_path = download.save_into(dir.path()).await.unwrap();
    assert!(saved_path.exists());
}

#[tokio::test]
async fn missing_template_leaves_draft_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let base_url = spawn_service(&dir).await;
    let editor = Editor::new(HttpTemplateClient::new(base_url));

    editor.set_title("Unsaved");
    editor.select_template(Some(12345)).await;

    let state = editor.snapshot();
    assert_eq!(state.draft.title.as_deref(), Some("Unsaved"));
    assert!(!state.is_loading);
}

#[tokio::test]
async fn client_fetches_raw_layout() {
    let dir = tempfile::tempdir().unwrap();
    let base_url = spawn_service(&dir).await;
    let client = HttpTemplateClient::new(base_url);

    assert_eq!(client.fetch_layout().await.unwrap(), LAYOUT);
}
