//! End-to-end tests: the real HTTP client against the in-process dev server,
//! with the mirror on a temporary SQLite file.

use std::sync::Arc;
use taskmirror::api::{HttpTaskApi, TaskApi};
use taskmirror::client::TaskClient;
use taskmirror::server::start_server;
use taskmirror::store::{KvStore, SqliteStore, TaskCache};
use taskmirror::types::Task;

/// Client wired to a freshly started dev server and an on-disk store.
/// Returns the temp dir so it outlives the store file.
async fn online_harness() -> (TaskClient, TaskCache, tempfile::TempDir) {
    let (_shutdown, addr) = start_server(0).await.expect("failed to start server");
    let api = HttpTaskApi::new(format!("http://{}", addr));

    let dir = tempfile::tempdir().unwrap();
    let store: Arc<dyn KvStore> =
        Arc::new(SqliteStore::open(dir.path().join("tasks.db")).unwrap());
    let cache = TaskCache::new(Arc::clone(&store));
    let client = TaskClient::new(Arc::new(api), TaskCache::new(store));
    (client, cache, dir)
}

/// A base URL nothing is listening on.
fn dead_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

#[tokio::test]
async fn full_crud_cycle_against_live_server() {
    let (client, cache, _dir) = online_harness().await;

    // Empty to start
    assert!(client.list().await.unwrap().is_empty());

    // Create two tasks; ids are server-assigned and unique
    let tasks = client.create("Buy milk").await.unwrap();
    assert_eq!(tasks.len(), 1);
    let tasks = client.create("Walk the dog").await.unwrap();
    assert_eq!(tasks.len(), 2);
    assert_ne!(tasks[0].id, tasks[1].id);
    assert!(tasks.iter().all(|t| !t.completed));

    // The mirror tracks the server after every operation
    assert_eq!(cache.load().unwrap(), tasks);

    // Toggle the first task
    let milk_id = tasks[0].id.clone();
    let tasks = client.toggle(&milk_id, true).await.unwrap();
    assert!(tasks.iter().find(|t| t.id == milk_id).unwrap().completed);

    // Delete it
    let tasks = client.delete(&milk_id).await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].text, "Walk the dog");
    assert_eq!(cache.load().unwrap(), tasks);
}

#[tokio::test]
async fn server_rejects_updates_to_unknown_ids() {
    let (_shutdown, addr) = start_server(0).await.expect("failed to start server");
    let api = HttpTaskApi::new(format!("http://{}", addr));

    // Non-2xx statuses surface as errors, same as transport failures
    assert!(api.update_task("missing", true).await.is_err());
    assert!(api.delete_task("missing").await.is_err());
}

#[tokio::test]
async fn mirror_survives_between_client_instances() {
    let (_shutdown, addr) = start_server(0).await.expect("failed to start server");
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("tasks.db");

    // First session, online: populate server and mirror
    {
        let store: Arc<dyn KvStore> = Arc::new(SqliteStore::open(&db_path).unwrap());
        let client = TaskClient::new(
            Arc::new(HttpTaskApi::new(format!("http://{}", addr))),
            TaskCache::new(store),
        );
        client.create("Buy milk").await.unwrap();
    }

    // Second session, offline: the mirror still has the task
    {
        let store: Arc<dyn KvStore> = Arc::new(SqliteStore::open(&db_path).unwrap());
        let client = TaskClient::new(
            Arc::new(HttpTaskApi::new(dead_url())),
            TaskCache::new(store),
        );
        let tasks = client.list().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "Buy milk");
    }
}

#[tokio::test]
async fn offline_operations_edit_the_sqlite_mirror() {
    let dir = tempfile::tempdir().unwrap();
    let store: Arc<dyn KvStore> =
        Arc::new(SqliteStore::open(dir.path().join("tasks.db")).unwrap());
    let cache = TaskCache::new(Arc::clone(&store));
    cache
        .save(&[
            Task {
                id: "1".to_string(),
                text: "Buy milk".to_string(),
                completed: false,
            },
            Task {
                id: "2".to_string(),
                text: "Walk the dog".to_string(),
                completed: false,
            },
        ])
        .unwrap();

    let client = TaskClient::new(Arc::new(HttpTaskApi::new(dead_url())), TaskCache::new(store));

    let tasks = client.toggle("1", true).await.unwrap();
    assert!(tasks[0].completed);

    let tasks = client.delete("2").await.unwrap();
    assert_eq!(tasks.len(), 1);

    let tasks = client.create("Water plants").await.unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[1].text, "Water plants");

    // All three edits landed in the store
    let mirrored = cache.load().unwrap();
    assert_eq!(mirrored, tasks);
    assert!(mirrored.iter().any(|t| t.id == "1" && t.completed));
    assert!(!mirrored.iter().any(|t| t.id == "2"));
}
