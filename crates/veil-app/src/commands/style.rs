
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

use veil_common::{Event, VeilError};
use veil_config::{SettingKey, StoreWatcher};
use veil_platform::StyleDir;
use veil_style::{apply_stylesheet, keyframes_css, style_injection_js, stylesheet_for};

use super::{Ports, Session};
use crate::cli::CompileArgs;

/// Build the output for the current settings as requested by `args`.
fn render(session: &mut Session, args: &CompileArgs) -> String {
    let snapshot = session.snapshot();
    let mut css = stylesheet_for(&snapshot, session.viewer());
    if args.keyframes {
        css.push('\n');
        css.push_str(&keyframes_css(snapshot.animation_duration));
    }
    css
}

fn emit(session: &mut Session, args: &CompileArgs, ports: &mut Ports<'_>) -> Result<(), VeilError> {
    let css = render(session, args);

    if let Some(dir) = &args.out_dir {
        if args.js {
            warn!("--js is ignored when writing to --out-dir");
        }
        let mut target = StyleDir::new(dir);
        apply_stylesheet(&mut target, &css)?;
        info!(dir = %dir.display(), bytes = css.len(), "stylesheet updated");
        return Ok(());
    }

    let text = if args.js { style_injection_js(&css) } else { css };
    writeln!(ports.out, "{text}")?;
    Ok(())
}

pub(super) fn compile(
    session: &mut Session,
    args: &CompileArgs,
    ports: &mut Ports<'_>,
) -> Result<(), VeilError> {
    emit(session, args, ports)
}

/// Recompile on every store change until Ctrl-C.
pub(super) fn watch(
    session: &mut Session,
    args: &CompileArgs,
    ports: &mut Ports<'_>,
) -> Result<(), VeilError> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(watch_loop(session, args, ports))
}

async fn watch_loop(
    session: &mut Session,
    args: &CompileArgs,
    ports: &mut Ports<'_>,
) -> Result<(), VeilError> {
    let bus = session.bus.clone();
    let mut events = bus.subscribe();

    let watcher = StoreWatcher::new(session.store.path());
    let mut watch_task = tokio::spawn({
        let bus = bus.clone();
        async move { watcher.watch(bus).await }
    });

    emit(session, args, ports)?;

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(Event::StoreFileChanged) => {
                    if let Err(e) = session.store.reload() {
                        warn!(error = %e, "store reload failed, keeping previous values");
                    }
                }
                Ok(Event::StoreReloaded) => emit(session, args, ports)?,
                Ok(Event::SettingChanged(name)) => {
                    if SettingKey::from_name(&name).is_some_and(SettingKey::affects_style) {
                        emit(session, args, ports)?;
                    }
                }
                Ok(Event::Shutdown) | Err(RecvError::Closed) => break,
                Ok(Event::Unknown) => {}
                Err(RecvError::Lagged(missed)) => {
                    warn!(missed, "watch fell behind, recompiling");
                    emit(session, args, ports)?;
                }
            },
            finished = &mut watch_task => {
                return match finished {
                    Ok(result) => result.map_err(VeilError::from),
                    Err(e) => Err(VeilError::Other(format!("store watcher stopped: {e}"))),
                };
            },
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted");
                bus.publish(Event::Shutdown);
            }
        }
    }

    watch_task.abort();
    Ok(())
}
