//! Scripted demo driving the todo list view against a running server.
//!
//! Start `taskpad-server`, then:
//!
//! ```text
//! TASKPAD_URL=http://localhost:8080 taskpad-demo
//! ```

use std::sync::Arc;
use taskpad_client::{
    FileSessionStorage, HttpTodoApi, SessionStorage, TodoListAction, TodoListEnvironment,
    TodoListReducer, TodoListState, ViewStore,
};
use taskpad_core::todo::Priority;
use tracing_subscriber::EnvFilter;

const SESSION_FILE: &str = ".taskpad-session.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taskpad_client=info")),
        )
        .init();

    let base_url =
        std::env::var("TASKPAD_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());

    let mut api = HttpTodoApi::new(base_url.clone());
    let storage = FileSessionStorage::new(SESSION_FILE);
    if let Some(session) = storage.load()? {
        tracing::info!("Using stored session");
        api = api.with_session(&session);
    }

    let store = ViewStore::new(
        TodoListState::new(),
        TodoListReducer::new(),
        TodoListEnvironment::new(Arc::new(api)),
    );

    println!("Taskpad demo against {base_url}\n");

    store.dispatch(TodoListAction::Load).await;
    print_list(&store).await;

    println!("\nAdding a todo...");
    store.dispatch(TodoListAction::OpenAddModal).await;
    store
        .dispatch(TodoListAction::SetTitle("Try the demo".to_string()))
        .await;
    store
        .dispatch(TodoListAction::SetDescription("Added by taskpad-demo".to_string()))
        .await;
    store
        .dispatch(TodoListAction::SetPriority(Priority::High))
        .await;
    store.dispatch(TodoListAction::SubmitAdd).await;
    print_notification(&store).await;

    let newest = store.state(|state| state.todos.first().cloned()).await;
    if let Some(todo) = newest {
        println!("\nRenaming \"{}\"...", todo.title);
        store
            .dispatch(TodoListAction::OpenEditModal(todo.id.clone()))
            .await;
        store
            .dispatch(TodoListAction::SetTitle("Try the demo (edited)".to_string()))
            .await;
        store.dispatch(TodoListAction::SubmitEdit).await;
        print_notification(&store).await;

        println!("\nToggling \"{}\"...", todo.title);
        store.dispatch(TodoListAction::Toggle(todo.id.clone())).await;
        print_notification(&store).await;
        print_list(&store).await;

        println!("\nDeleting \"{}\"...", todo.title);
        store.dispatch(TodoListAction::Delete(todo.id)).await;
        print_notification(&store).await;
    }

    print_list(&store).await;
    Ok(())
}

async fn print_list(store: &ViewStore<TodoListReducer>) {
    let lines = store
        .state(|state| {
            state
                .todos
                .iter()
                .map(|todo| {
                    let marker = match todo.status {
                        taskpad_core::todo::Status::Done => "x",
                        taskpad_core::todo::Status::Pending => " ",
                    };
                    format!("[{marker}] {} ({:?})", todo.title, todo.priority)
                })
                .collect::<Vec<_>>()
        })
        .await;

    if lines.is_empty() {
        println!("(no todos)");
    } else {
        for line in lines {
            println!("{line}");
        }
    }
}

async fn print_notification(store: &ViewStore<TodoListReducer>) {
    if let Some(notification) = store.state(|state| state.notification.clone()).await {
        let prefix = if notification.is_error() { "error" } else { "ok" };
        println!("{prefix}: {}", notification.message());
        store.dispatch(TodoListAction::DismissNotification).await;
    }
}
