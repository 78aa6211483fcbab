use super::*;
use crate::cli::{CompileArgs, PresetCommand};
use serde_json::json;
use std::path::PathBuf;
use tempfile::TempDir;
use veil_common::{MemoryClipboard, NotificationQueue, ScriptedDialogs};
use veil_config::{PreferenceStore, SettingKey};

struct Harness {
    dir: TempDir,
    session: Session,
    out: Vec<u8>,
    dialogs: ScriptedDialogs,
    clipboard: MemoryClipboard,
}

impl Harness {
    fn new(viewer: Viewer) -> Self {
        let dir = TempDir::new().unwrap();
        let session = Session::open(
            &dir.path().join("world.toml"),
            viewer,
            Box::new(NotificationQueue::default()),
        )
        .unwrap();
        Self {
            dir,
            session,
            out: Vec::new(),
            dialogs: ScriptedDialogs::accepting(),
            clipboard: MemoryClipboard::default(),
        }
    }

    fn player() -> Self {
        Self::new(Viewer::player("alice"))
    }

    fn run(&mut self, command: Command) -> Result<(), VeilError> {
        let mut ports = Ports {
            out: &mut self.out,
            dialogs: &mut self.dialogs,
            clipboard: &mut self.clipboard,
        };
        run(&mut self.session, command, &mut ports)
    }

    fn take_output(&mut self) -> String {
        String::from_utf8(std::mem::take(&mut self.out)).unwrap()
    }

    fn stored(&self, key: SettingKey) -> serde_json::Value {
        self.session.store.get(key).unwrap()
    }

    fn world(&self) -> PathBuf {
        self.dir.path().join("world.toml")
    }
}

fn compile_args() -> CompileArgs {
    CompileArgs {
        keyframes: false,
        js: false,
        out_dir: None,
    }
}

fn set(h: &mut Harness, name: &str, value: &str) {
    h.run(Command::Set {
        name: name.into(),
        value: value.into(),
    })
    .unwrap();
}

#[test]
fn set_parses_json_and_persists() {
    let mut h = Harness::player();
    set(&mut h, "hiddenPages", "[2, 3]");
    set(&mut h, "hideChat", "true");

    assert_eq!(h.stored(SettingKey::HiddenPages), json!([2, 3]));
    assert_eq!(h.stored(SettingKey::HideChat), json!(true));
    assert!(h.world().exists());
}

#[test]
fn set_clamps_opacity() {
    let mut h = Harness::player();
    set(&mut h, "slotOpacity", "180");
    assert_eq!(h.stored(SettingKey::Opacity), json!(100));
}

#[test]
fn set_rejects_unknown_setting() {
    let mut h = Harness::player();
    let err = h
        .run(Command::Set {
            name: "hideMacroDirectory".into(),
            value: "true".into(),
        })
        .unwrap_err();
    assert!(err.to_string().contains("hideMacroDirectory"));
}

#[test]
fn set_rejects_value_of_wrong_shape() {
    let mut h = Harness::player();
    let err = h
        .run(Command::Set {
            name: "hideChat".into(),
            value: "yes".into(),
        })
        .unwrap_err();
    assert!(err.to_string().contains("hideChat"));
    assert_eq!(h.stored(SettingKey::HideChat), json!(false));
    assert!(!h.world().exists());
}

#[test]
fn set_active_preset_takes_plain_string() {
    let mut h = Harness::player();
    set(&mut h, "activePreset", "RP Mode");
    assert_eq!(h.stored(SettingKey::ActivePreset), json!("RP Mode"));
}

#[test]
fn compile_prints_stylesheet() {
    let mut h = Harness::player();
    set(&mut h, "hideChat", "true");

    h.run(Command::Compile(compile_args())).unwrap();
    let css = h.take_output();
    assert!(css.contains("#chat"));
    assert!(css.contains("visibility: hidden !important"));
}

#[test]
fn compile_with_keyframes_and_js() {
    let mut h = Harness::player();
    set(&mut h, "hidePlayers", "true");

    h.run(Command::Compile(CompileArgs {
        keyframes: true,
        js: true,
        out_dir: None,
    }))
    .unwrap();
    let js = h.take_output();
    assert!(js.contains("getElementById"));
    assert!(js.contains("@keyframes"));
}

#[test]
fn compile_to_out_dir_writes_style_file() {
    let mut h = Harness::player();
    set(&mut h, "hideSidebar", "true");
    let out_dir = h.dir.path().join("styles");

    h.run(Command::Compile(CompileArgs {
        keyframes: false,
        js: false,
        out_dir: Some(out_dir.clone()),
    }))
    .unwrap();

    assert!(h.take_output().is_empty());
    let file = std::fs::read_dir(&out_dir)
        .unwrap()
        .next()
        .unwrap()
        .unwrap()
        .path();
    assert_eq!(file.extension().and_then(|e| e.to_str()), Some("css"));
    let css = std::fs::read_to_string(file).unwrap();
    assert!(css.contains("#sidebar"));
    assert!(css.contains("visibility: hidden !important"));
}

#[test]
fn owner_keeps_sidebar_unless_apply_to_gm() {
    let mut h = Harness::new(Viewer::owner("gm"));
    set(&mut h, "hideSidebar", "true");

    h.run(Command::Compile(compile_args())).unwrap();
    assert!(!h.take_output().contains("visibility: hidden"));

    set(&mut h, "applyToGM", "true");
    h.run(Command::Compile(compile_args())).unwrap();
    assert!(h.take_output().contains("visibility: hidden"));
}

#[test]
fn show_prints_snapshot_and_active_preset() {
    let mut h = Harness::player();
    h.run(Command::Preset(PresetCommand::Load {
        name: "Minimal".into(),
    }))
    .unwrap();

    h.run(Command::Show).unwrap();
    let shown = h.take_output();
    assert!(shown.contains("\"opacity\": 60"));
    assert!(shown.contains("active preset: Minimal"));
}

#[test]
fn check_reports_unknown_tabs() {
    let mut h = Harness::player();
    set(&mut h, "hiddenSidebarTabs", r#"["combat", "homebrew"]"#);

    h.run(Command::Check).unwrap();
    let report = h.take_output();
    assert!(report.contains("unknown sidebar tab \"homebrew\""));
    assert!(!report.contains("\"combat\""));
    assert!(report.contains("settings OK"));
}

#[test]
fn check_fails_on_out_of_range_slot() {
    let mut h = Harness::player();
    h.session
        .store
        .set(SettingKey::HiddenSlots, json!({"77": true}))
        .unwrap();

    let err = h.run(Command::Check).unwrap_err();
    assert!(matches!(err, VeilError::Config(_)));
}

#[test]
fn preset_save_list_delete() {
    let mut h = Harness::player();
    set(&mut h, "hideBackground", "true");

    h.run(Command::Preset(PresetCommand::Save {
        name: Some("  Boss Fight ".into()),
    }))
    .unwrap();
    h.run(Command::Preset(PresetCommand::List)).unwrap();
    let listed = h.take_output();
    assert!(listed.contains("Minimal (built-in)"));
    assert!(listed.contains("Boss Fight (custom)"));

    h.run(Command::Preset(PresetCommand::Delete {
        name: "Boss Fight".into(),
    }))
    .unwrap();
    assert_eq!(h.stored(SettingKey::Presets), json!([]));
}

#[test]
fn preset_save_prompts_for_name() {
    let mut h = Harness::player();
    h.dialogs.prompt_answer = Some("Prompted".into());

    h.run(Command::Preset(PresetCommand::Save { name: None }))
        .unwrap();
    let presets = h.stored(SettingKey::Presets);
    assert_eq!(presets[0]["name"], json!("Prompted"));
}

#[test]
fn preset_save_dismissed_prompt_writes_nothing() {
    let mut h = Harness::player();
    h.dialogs.prompt_answer = None;

    h.run(Command::Preset(PresetCommand::Save { name: None }))
        .unwrap();
    assert_eq!(h.stored(SettingKey::Presets), json!([]));
}

#[test]
fn deleting_built_in_preset_fails() {
    let mut h = Harness::player();
    let err = h
        .run(Command::Preset(PresetCommand::Delete {
            name: "Minimal".into(),
        }))
        .unwrap_err();
    assert!(matches!(err, VeilError::Preset(_)));
}

#[test]
fn marks_active_preset_in_list() {
    let mut h = Harness::player();
    h.run(Command::Preset(PresetCommand::Load {
        name: "RP Mode".into(),
    }))
    .unwrap();
    h.run(Command::Preset(PresetCommand::List)).unwrap();
    assert!(h.take_output().contains("* RP Mode (built-in)"));
}

#[test]
fn export_then_import_into_another_world() {
    let mut source = Harness::player();
    set(&mut source, "hiddenPages", "[4]");
    set(&mut source, "slotOpacity", "35");

    let export_dir = source.dir.path().join("exports");
    std::fs::create_dir_all(&export_dir).unwrap();
    source
        .run(Command::Export {
            dir: Some(export_dir.clone()),
        })
        .unwrap();
    let exported = PathBuf::from(source.take_output().trim());
    assert!(exported.starts_with(&export_dir));

    let mut target = Harness::player();
    target.run(Command::Import { file: exported }).unwrap();
    assert!(target.take_output().starts_with("imported"));
    assert_eq!(target.stored(SettingKey::HiddenPages), json!([4]));
    assert_eq!(target.stored(SettingKey::Opacity), json!(35));
    assert_eq!(target.dialogs.confirms.len(), 1);
}

#[test]
fn declined_import_changes_nothing() {
    let mut h = Harness::player();
    let file = h.dir.path().join("in.json");
    std::fs::write(
        &file,
        r#"{"version": "2.0.4", "exportDate": "2025-01-01T00:00:00.000Z", "settings": {"hideChat": true}}"#,
    )
    .unwrap();
    h.dialogs = ScriptedDialogs::declining();

    h.run(Command::Import { file }).unwrap();
    assert_eq!(h.take_output().trim(), "import cancelled");
    assert_eq!(h.stored(SettingKey::HideChat), json!(false));
}

#[test]
fn import_missing_file_fails() {
    let mut h = Harness::player();
    let file = h.dir.path().join("nope.json");
    let err = h.run(Command::Import { file }).unwrap_err();
    assert!(matches!(err, VeilError::Io(_)));
}

#[test]
fn share_then_load_shared() {
    let mut source = Harness::player();
    set(&mut source, "hiddenSlots", r#"{"3": true}"#);
    set(&mut source, "hideSceneNavigation", "true");

    source.run(Command::Share).unwrap();
    let code = source.take_output().trim().to_owned();
    assert_eq!(source.clipboard.contents.as_deref(), Some(code.as_str()));

    let mut target = Harness::player();
    target.run(Command::LoadShared { code }).unwrap();
    assert_eq!(target.stored(SettingKey::HiddenSlots), json!({"3": true}));
    assert_eq!(target.stored(SettingKey::HideSceneNavigation), json!(true));
}

#[test]
fn load_shared_rejects_garbage() {
    let mut h = Harness::player();
    let err = h
        .run(Command::LoadShared {
            code: "not a code".into(),
        })
        .unwrap_err();
    assert!(matches!(err, VeilError::Codec(_)));
}
