use super::*;
use crate::keys::SettingKey;
use crate::settings::Settings;
use crate::store::{MemoryStore, PreferenceStore};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use tempfile::TempDir;
use veil_common::{
    ClipboardSink, CodecError, MemoryClipboard, NotificationLevel, NotificationQueue,
    PlatformError, ScriptedDialogs,
};

struct BrokenClipboard;

impl ClipboardSink for BrokenClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), PlatformError> {
        Err(PlatformError::ClipboardError("no display".into()))
    }
}

fn populated_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    store
        .set(SettingKey::HiddenSlots, json!({"1": true, "13": true, "20": false}))
        .unwrap();
    store.set(SettingKey::HiddenPages, json!([4])).unwrap();
    store.set(SettingKey::HideBackground, json!(true)).unwrap();
    store.set(SettingKey::ApplyToGm, json!(true)).unwrap();
    store.set(SettingKey::HideSidebar, json!(true)).unwrap();
    store.set(SettingKey::HideChat, json!(true)).unwrap();
    store
        .set(SettingKey::HiddenSidebarTabs, json!(["combat", "journal"]))
        .unwrap();
    store.set(SettingKey::Opacity, json!(0)).unwrap();
    store.set(SettingKey::AnimationDuration, json!(750)).unwrap();
    store
        .set(
            SettingKey::Presets,
            json!([{
                "name": "Boss",
                "config": {
                    "hiddenSlots": {},
                    "hideBackground": false,
                    "hideLeftControls": true,
                    "hideRightControls": false,
                    "opacity": 20,
                    "hiddenPages": [2]
                },
                "builtIn": false
            }]),
        )
        .unwrap();
    store
        .set(
            SettingKey::PerPlayerSettings,
            json!({"alice": {"hideChat": true, "hiddenSlots": {"3": true}}}),
        )
        .unwrap();
    store
}

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 15, 9, 26).unwrap()
}

#[test]
fn export_document_shape() {
    let mut store = populated_store();
    let mut queue = NotificationQueue::default();
    let mut settings = Settings::new(&mut store, &mut queue);

    let file = export_configuration(&mut settings, fixed_now()).unwrap();
    assert_eq!(file.file_name, "rnk-hide-em-config-1741964966000.json");
    assert!(file.contents.contains('\n'), "export is pretty-printed");

    let doc: Value = serde_json::from_str(&file.contents).unwrap();
    assert_eq!(doc["version"], "2.0.4");
    assert_eq!(doc["exportDate"], "2025-03-14T15:09:26.000Z");
    assert_eq!(doc["settings"]["applyToGM"], true);
    assert_eq!(doc["settings"]["opacity"], 0);
    assert_eq!(doc["settings"]["hiddenSlots"]["13"], true);
    assert_eq!(doc["settings"]["presets"][0]["name"], "Boss");
    assert_eq!(doc["settings"]["perPlayerSettings"]["alice"]["hideChat"], true);
    assert!(doc["settings"].get("activePreset").is_none());
}

#[test]
fn export_then_import_reproduces_snapshot() {
    let mut source = populated_store();
    let mut queue = NotificationQueue::default();
    let mut settings = Settings::new(&mut source, &mut queue);
    let original = settings.snapshot();
    let file = export_configuration(&mut settings, fixed_now()).unwrap();

    let mut target = MemoryStore::new();
    let mut queue = NotificationQueue::default();
    let mut dialogs = ScriptedDialogs::accepting();
    let mut settings = Settings::new(&mut target, &mut queue);

    let outcome = import_configuration(&mut settings, &mut dialogs, &file.contents).unwrap();
    assert_eq!(outcome, ImportOutcome::Applied(17));
    assert_eq!(settings.snapshot(), original);
    assert_eq!(
        target.get(SettingKey::Presets).unwrap(),
        source.get(SettingKey::Presets).unwrap()
    );
    assert_eq!(
        queue.last().unwrap().message,
        "Configuration imported successfully!"
    );
}

#[test]
fn import_asks_for_confirmation_with_version_and_date() {
    let mut store = MemoryStore::new();
    let mut queue = NotificationQueue::default();
    let mut dialogs = ScriptedDialogs::accepting();
    let mut settings = Settings::new(&mut store, &mut queue);

    let json = r#"{"version":"2.0.4","exportDate":"2025-03-14T15:09:26.000Z","settings":{}}"#;
    let outcome = import_configuration(&mut settings, &mut dialogs, json).unwrap();

    assert_eq!(outcome, ImportOutcome::Applied(0));
    assert_eq!(dialogs.confirms.len(), 1);
    assert_eq!(dialogs.confirms[0].title, "Import Configuration");
    assert!(dialogs.confirms[0].body.contains("Version: 2.0.4"));
    assert!(dialogs.confirms[0].body.contains("Exported: 2025-03-14"));
}

#[test]
fn declined_import_writes_nothing() {
    let mut store = MemoryStore::new();
    let mut queue = NotificationQueue::default();
    let mut dialogs = ScriptedDialogs::declining();
    let mut settings = Settings::new(&mut store, &mut queue);

    let json = r#"{"version":"2.0.4","settings":{"hideChat":true}}"#;
    let outcome = import_configuration(&mut settings, &mut dialogs, json).unwrap();

    assert_eq!(outcome, ImportOutcome::Cancelled);
    assert!(queue.is_empty());
    assert!(store.is_empty());
}

#[test]
fn import_applies_only_present_fields() {
    let mut store = MemoryStore::new();
    store.set(SettingKey::HideSidebar, json!(true)).unwrap();
    store.set(SettingKey::HiddenPages, json!([1])).unwrap();
    let mut queue = NotificationQueue::default();
    let mut dialogs = ScriptedDialogs::accepting();
    let mut settings = Settings::new(&mut store, &mut queue);

    let json = r#"{
        "version": "2.0.4",
        "settings": {"hideChat": true, "opacity": 250, "hiddenPages": null, "hideMacroDirectory": true}
    }"#;
    let outcome = import_configuration(&mut settings, &mut dialogs, json).unwrap();

    assert_eq!(outcome, ImportOutcome::Applied(2));
    assert_eq!(store.get(SettingKey::HideChat).unwrap(), json!(true));
    assert_eq!(store.get(SettingKey::Opacity).unwrap(), json!(100));
    assert_eq!(store.get(SettingKey::HideSidebar).unwrap(), json!(true));
    assert_eq!(store.get(SettingKey::HiddenPages).unwrap(), json!([1]));
}

#[test]
fn import_accepts_legacy_preset_with_null_pages() {
    let mut store = MemoryStore::new();
    let mut queue = NotificationQueue::default();
    let mut dialogs = ScriptedDialogs::accepting();
    let mut settings = Settings::new(&mut store, &mut queue);

    let json = r#"{
        "version": "2.0.4",
        "exportDate": "2024-06-01T10:00:00.000Z",
        "settings": {
            "hideChat": true,
            "presets": [{
                "name": "Old Layout",
                "config": {"hiddenSlots": {"2": true}, "hideBackground": true, "opacity": 70, "hiddenPages": null},
                "builtIn": false
            }]
        }
    }"#;
    let outcome = import_configuration(&mut settings, &mut dialogs, json).unwrap();
    drop(settings);

    assert_eq!(outcome, ImportOutcome::Applied(2));
    assert_eq!(store.get(SettingKey::HideChat).unwrap(), json!(true));
    let presets = store.get(SettingKey::Presets).unwrap();
    assert_eq!(presets[0]["name"], json!("Old Layout"));
    assert_eq!(presets[0]["config"]["hiddenPages"], json!([]));
    assert_eq!(presets[0]["config"]["opacity"], json!(70));
}

#[test]
fn import_without_version_or_settings_is_a_format_error() {
    for json in [
        r#"{"settings":{}}"#,
        r#"{"version":"","settings":{}}"#,
        r#"{"version":"2.0.4"}"#,
        r#"{"version":"2.0.4","settings":null}"#,
        "not json",
    ] {
        let mut store = MemoryStore::new();
        let mut queue = NotificationQueue::default();
        let mut dialogs = ScriptedDialogs::accepting();
        let mut settings = Settings::new(&mut store, &mut queue);

        let result = import_configuration(&mut settings, &mut dialogs, json);
        assert!(matches!(result, Err(CodecError::Format(_))), "{json}");
        assert!(dialogs.confirms.is_empty());
        assert_eq!(queue.last().unwrap().level, NotificationLevel::Error);
        assert_eq!(
            queue.last().unwrap().message,
            "Error importing configuration! Check console for details."
        );
        assert!(store.is_empty());
    }
}

#[test]
fn export_to_dir_writes_file_and_notifies() {
    let dir = TempDir::new().unwrap();
    let mut store = populated_store();
    let mut queue = NotificationQueue::default();
    let mut settings = Settings::new(&mut store, &mut queue);

    let path = export_to_dir(&mut settings, dir.path(), fixed_now()).unwrap();
    assert!(path.ends_with("rnk-hide-em-config-1741964966000.json"));
    let doc: ExportDocument =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(doc.settings.hide_chat, Some(true));
    assert_eq!(
        queue.last().unwrap().message,
        "Configuration exported successfully!"
    );
}

#[test]
fn share_code_excludes_apply_to_gm() {
    let mut store = populated_store();
    let mut queue = NotificationQueue::default();
    let mut clipboard = MemoryClipboard::default();
    let mut settings = Settings::new(&mut store, &mut queue);

    let code = share_configuration(&mut settings, &mut clipboard).unwrap();
    assert_eq!(clipboard.contents.as_deref(), Some(code.as_str()));

    let json = String::from_utf8(STANDARD.decode(&code).unwrap()).unwrap();
    assert!(!json.contains('\n'));
    let value: Value = serde_json::from_str(&json).unwrap();
    assert!(value.get("applyToGM").is_none());
    assert!(value.get("version").is_none());
    assert!(value.get("exportDate").is_none());
    assert_eq!(value["hiddenSidebarTabs"], json!(["combat", "journal"]));
    assert_eq!(
        queue.last().unwrap().message,
        "Configuration code copied to clipboard!"
    );
}

#[test]
fn share_survives_clipboard_failure() {
    let mut store = populated_store();
    let mut queue = NotificationQueue::default();
    let mut settings = Settings::new(&mut store, &mut queue);

    let code = share_configuration(&mut settings, &mut BrokenClipboard).unwrap();
    assert!(!code.is_empty());
    assert_eq!(queue.last().unwrap().level, NotificationLevel::Error);
    assert_eq!(queue.last().unwrap().message, "Failed to copy to clipboard");
}

#[test]
fn share_then_load_shared_round_trip() {
    let mut source = populated_store();
    let mut queue = NotificationQueue::default();
    let mut settings = Settings::new(&mut source, &mut queue);
    let code = share_code(&mut settings).unwrap();
    let mut expected = settings.snapshot();

    let mut target = MemoryStore::new();
    let mut queue = NotificationQueue::default();
    let mut settings = Settings::new(&mut target, &mut queue);
    load_shared_configuration(&mut settings, &code).unwrap();

    // applyToGM does not travel in share codes.
    expected.apply_to_gm = false;
    assert_eq!(settings.snapshot(), expected);
    assert_eq!(queue.last().unwrap().message, "Shared configuration loaded!");
}

#[test]
fn load_shared_empty_object_writes_nothing() {
    let mut store = MemoryStore::new();
    let mut queue = NotificationQueue::default();
    let mut settings = Settings::new(&mut store, &mut queue);

    let code = STANDARD.encode("{}");
    let result = load_shared_configuration(&mut settings, &code);

    assert!(matches!(result, Err(CodecError::InvalidShareCode(_))));
    assert_eq!(queue.last().unwrap().level, NotificationLevel::Error);
    assert_eq!(queue.last().unwrap().message, "Invalid configuration code!");
    assert!(store.is_empty());
}

#[test]
fn load_shared_rejects_garbage() {
    let codes = [
        "%%%not-base64%%%".to_owned(),
        STANDARD.encode("not json"),
        STANDARD.encode(r#"{"hiddenSlots":null}"#),
        STANDARD.encode("[1, 2]"),
    ];
    for code in &codes {
        let mut store = MemoryStore::new();
        let mut queue = NotificationQueue::default();
        let mut settings = Settings::new(&mut store, &mut queue);

        assert!(load_shared_configuration(&mut settings, code).is_err(), "{code}");
        assert!(store.is_empty());
    }
}

#[test]
fn load_shared_defaults_absent_fields_and_keeps_zero_opacity() {
    let mut store = MemoryStore::new();
    store.set(SettingKey::HideChat, json!(true)).unwrap();
    store.set(SettingKey::ApplyToGm, json!(true)).unwrap();
    store
        .set(SettingKey::Presets, json!([{"name": "Mine", "config": {}}]))
        .unwrap();
    let mut queue = NotificationQueue::default();
    let mut settings = Settings::new(&mut store, &mut queue);

    let code = STANDARD.encode(r#"{"hiddenSlots":{"2":true},"opacity":0}"#);
    load_shared_configuration(&mut settings, &code).unwrap();

    assert_eq!(store.get(SettingKey::HiddenSlots).unwrap(), json!({"2": true}));
    assert_eq!(store.get(SettingKey::Opacity).unwrap(), json!(0));
    assert_eq!(store.get(SettingKey::AnimationDuration).unwrap(), json!(300));
    assert_eq!(store.get(SettingKey::HideChat).unwrap(), json!(false));
    assert_eq!(store.get(SettingKey::Presets).unwrap(), json!([]));
    assert_eq!(store.get(SettingKey::PerPlayerSettings).unwrap(), json!({}));
    assert_eq!(store.get(SettingKey::ApplyToGm).unwrap(), json!(true));
}

#[test]
fn decode_share_code_tolerates_surrounding_whitespace() {
    let code = format!("  {}\n", STANDARD.encode(r#"{"hiddenSlots":{}}"#));
    let payload = decode_share_code(&code).unwrap();
    assert_eq!(payload.hidden_slots, Some(Default::default()));
    assert_eq!(payload.hide_chat, None);
}
