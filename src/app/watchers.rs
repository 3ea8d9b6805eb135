use std::path::Path;
use std::sync::mpsc::{Receiver, channel};

use notify::{EventKind, RecursiveMode, Watcher};

/// Watch the config file's directory and signal when the file itself
/// changes. The returned watcher must stay alive for events to flow.
pub(super) fn watch_config(
    path: &Path,
) -> Result<(Receiver<()>, notify::RecommendedWatcher), notify::Error> {
    let (tx, rx) = channel::<()>();
    let target = path.to_path_buf();
    let mut watcher =
        notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res {
                match event.kind {
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Any => {
                        if event
                            .paths
                            .iter()
                            .any(|p| p.file_name() == target.file_name())
                        {
                            let _ = tx.send(());
                        }
                    }
                    _ => {}
                }
            }
        })?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    watcher.watch(dir, RecursiveMode::NonRecursive)?;
    Ok((rx, watcher))
}
