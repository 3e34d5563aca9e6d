//! Desktop [`UrlDispatcher`] backed by the platform URL opener.

use std::future::Future;

use cutie_link_sdk::{Url, UrlDispatcher};
use tokio::process::Command;

/// Opens URLs with `open` (macOS), `xdg-open` (Linux) or `start` (Windows).
///
/// `http` / `https` are always considered openable.  For custom schemes a
/// registered handler is looked up with `xdg-mime` on Linux and in
/// `HKEY_CLASSES_ROOT` on Windows.  There is no lookup on macOS: custom
/// schemes are reported as not openable there, so the Feedback App always
/// looks missing and `open` goes to the store listing.
///
/// [`can_open`](UrlDispatcher::can_open) spawns the lookup with the blocking
/// `std::process::Command` and waits for it, stalling the calling thread
/// (including a tokio worker) for the duration of the lookup.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemDispatcher;

impl UrlDispatcher for SystemDispatcher {
    fn can_open(&self, url: &Url) -> bool {
        match url.scheme() {
            "http" | "https" => true,
            scheme => scheme_handler_registered(scheme),
        }
    }

    fn open(&self, url: &Url) -> impl Future<Output = bool> + Send {
        let url = url.to_string();
        async move {
            let Some(mut cmd) = opener(&url) else {
                tracing::warn!("no URL opener available for this platform");
                return false;
            };
            match cmd.status().await {
                Ok(status) => status.success(),
                Err(e) => {
                    tracing::warn!(error = %e, "failed to launch URL opener");
                    false
                }
            }
        }
    }
}

/// Platform command that opens `url`.
fn opener(url: &str) -> Option<Command> {
    #[cfg(target_os = "macos")]
    {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        return Some(cmd);
    }

    #[cfg(target_os = "linux")]
    {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        return Some(cmd);
    }

    #[cfg(target_os = "windows")]
    {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", url]);
        return Some(cmd);
    }

    #[allow(unreachable_code)]
    {
        let _ = url;
        None
    }
}

#[cfg(target_os = "linux")]
fn scheme_handler_registered(scheme: &str) -> bool {
    std::process::Command::new("xdg-mime")
        .args(["query", "default", &format!("x-scheme-handler/{scheme}")])
        .output()
        .is_ok_and(|out| {
            out.status.success() && desktop_entry(&String::from_utf8_lossy(&out.stdout)).is_some()
        })
}

#[cfg(target_os = "windows")]
fn scheme_handler_registered(scheme: &str) -> bool {
    std::process::Command::new("reg")
        .args(["query", &format!("HKEY_CLASSES_ROOT\\{scheme}"), "/v", "URL Protocol"])
        .output()
        .is_ok_and(|out| out.status.success())
}

#[cfg(not(any(target_os = "linux", target_os = "windows")))]
fn scheme_handler_registered(_scheme: &str) -> bool {
    false
}

/// Desktop entry named in `xdg-mime query default` output, if any.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn desktop_entry(output: &str) -> Option<&str> {
    let entry = output.trim();
    (!entry.is_empty()).then_some(entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn web_urls_are_always_openable() {
        let url = Url::parse("https://apps.apple.com/app/cuti-e-feedback/id0000000000").unwrap();
        assert!(SystemDispatcher.can_open(&url));
    }

    #[test]
    fn desktop_entry_parsing() {
        assert_eq!(desktop_entry("cutie.desktop\n"), Some("cutie.desktop"));
        assert_eq!(desktop_entry("  \n"), None);
        assert_eq!(desktop_entry(""), None);
    }

    #[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
    #[test]
    fn opener_exists_on_desktop_platforms() {
        assert!(opener("https://example.com").is_some());
    }
}
