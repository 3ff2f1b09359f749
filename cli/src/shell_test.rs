use super::*;
use client::{ApiError, Item, ItemPayload};
use std::sync::Mutex;

/// Minimal in-memory collection; `offline` makes every call fail.
#[derive(Default)]
struct MemoryApi {
    items: Mutex<Vec<Item>>,
    offline: bool,
}

impl MemoryApi {
    fn check(&self) -> Result<(), ApiError> {
        if self.offline {
            return Err(ApiError::Request("connection refused".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ItemsApi for MemoryApi {
    async fn list(&self) -> Result<Vec<Item>, ApiError> {
        self.check()?;
        Ok(self.items.lock().expect("items mutex should lock").clone())
    }

    async fn get(&self, id: ItemId) -> Result<Item, ApiError> {
        self.check()?;
        let items = self.items.lock().expect("items mutex should lock");
        items.iter().find(|i| i.id == id).cloned().ok_or(ApiError::Status { status: 404, detail: None })
    }

    async fn create(&self, payload: &ItemPayload) -> Result<Item, ApiError> {
        self.check()?;
        let mut items = self.items.lock().expect("items mutex should lock");
        let id = ItemId(items.iter().map(|i| i.id.0).max().unwrap_or(0) + 1);
        let item = Item {
            id,
            name: payload.name.clone(),
            description: Some(payload.description.clone()),
            completed: payload.completed,
        };
        items.push(item.clone());
        Ok(item)
    }

    async fn update(&self, id: ItemId, payload: &ItemPayload) -> Result<Item, ApiError> {
        self.check()?;
        let mut items = self.items.lock().expect("items mutex should lock");
        let item = items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(ApiError::Status { status: 404, detail: Some("Item not found".into()) })?;
        item.name.clone_from(&payload.name);
        item.description = Some(payload.description.clone());
        item.completed = payload.completed;
        Ok(item.clone())
    }

    async fn delete(&self, id: ItemId) -> Result<(), ApiError> {
        self.check()?;
        let mut items = self.items.lock().expect("items mutex should lock");
        let before = items.len();
        items.retain(|i| i.id != id);
        if items.len() == before {
            return Err(ApiError::Status { status: 404, detail: Some("Item not found".into()) });
        }
        Ok(())
    }
}

async fn run_script(api: MemoryApi, script: &str) -> (ItemListClient<MemoryApi>, String) {
    let mut client = ItemListClient::new(api);
    let mut output = Vec::new();
    run_shell(&mut client, script.as_bytes(), &mut output).await.expect("shell should finish");
    (client, String::from_utf8(output).expect("output should be utf-8"))
}

// =============================================================
// parse_command
// =============================================================

#[test]
fn parse_blank_line_is_noop() {
    assert_eq!(parse_command("   "), Ok(ShellCommand::Noop));
}

#[test]
fn parse_keeps_inner_spacing_of_text() {
    assert_eq!(parse_command("name  Buy   milk "), Ok(ShellCommand::DraftName("Buy   milk".into())));
}

#[test]
fn parse_name_requires_text() {
    assert_eq!(parse_command("name"), Err(ParseError::MissingArgument("name")));
}

#[test]
fn parse_desc_allows_empty_to_clear() {
    assert_eq!(parse_command("desc"), Ok(ShellCommand::DraftDescription(String::new())));
}

#[test]
fn parse_add_with_and_without_name() {
    assert_eq!(parse_command("add"), Ok(ShellCommand::Add(None)));
    assert_eq!(parse_command("add Walk dog"), Ok(ShellCommand::Add(Some("Walk dog".into()))));
}

#[test]
fn parse_ids() {
    assert_eq!(parse_command("edit 3"), Ok(ShellCommand::Edit(ItemId(3))));
    assert_eq!(parse_command("rm 4"), Ok(ShellCommand::Delete(ItemId(4))));
    assert_eq!(parse_command("delete x"), Err(ParseError::InvalidId("x".into())));
    assert_eq!(parse_command("edit"), Err(ParseError::MissingArgument("edit")));
}

#[test]
fn parse_done_flag() {
    assert_eq!(parse_command("done yes"), Ok(ShellCommand::EditCompleted(true)));
    assert_eq!(parse_command("done OFF"), Ok(ShellCommand::EditCompleted(false)));
    assert_eq!(parse_command("done maybe"), Err(ParseError::InvalidFlag("maybe".into())));
}

#[test]
fn parse_unknown_command() {
    assert_eq!(parse_command("frobnicate 1"), Err(ParseError::UnknownCommand("frobnicate".into())));
}

// =============================================================
// run_shell
// =============================================================

#[tokio::test]
async fn shell_renders_empty_list_on_start() {
    let (client, output) = run_script(MemoryApi::default(), "quit\n").await;
    assert!(client.is_mounted());
    assert!(output.contains(crate::render::EMPTY_LIST));
}

#[tokio::test]
async fn shell_add_edit_and_delete_flow() {
    let script = "name Buy milk\ndesc 2 litres\nadd\nadd Walk dog\nedit 2\ndone yes\nsave\ndelete 1\nquit\n";
    let (client, output) = run_script(MemoryApi::default(), script).await;

    assert_eq!(client.items().len(), 1);
    let remaining = &client.items()[0];
    assert_eq!(remaining.name, "Walk dog");
    assert!(remaining.completed);
    assert!(client.editing().is_none());
    assert!(output.contains("[1] Buy milk - 2 litres (Pending)"));
    assert!(output.contains("Edit Item (ID: 2)"));
    assert!(output.ends_with("Current Items\n[2] Walk dog (Completed)\n"));
}

#[tokio::test]
async fn shell_failure_keeps_draft_and_continues() {
    let api = MemoryApi { offline: true, ..MemoryApi::default() };
    let (client, output) = run_script(api, "name Buy milk\nadd\nlist\n").await;

    assert!(client.items().is_empty());
    assert_eq!(client.draft().name, "Buy milk");
    assert!(output.contains(r#"New item: name="Buy milk""#));
}

#[tokio::test]
async fn shell_reports_parse_errors_without_stopping() {
    let (_, output) = run_script(MemoryApi::default(), "bogus\nhelp\n").await;
    assert!(output.contains("unknown command `bogus`; type `help` for commands"));
    assert!(output.contains("done yes|no"));
}

#[tokio::test]
async fn shell_cancel_leaves_items() {
    let api = MemoryApi::default();
    api.items.lock().unwrap().push(Item { id: ItemId(1), name: "a".into(), description: None, completed: false });
    let (client, _) = run_script(api, "edit 1\nename changed\ncancel\n").await;

    assert!(client.editing().is_none());
    assert_eq!(client.items()[0].name, "a");
}
