/// Hands a finished link to the host environment.
pub trait LinkOpener: Send + Sync {
    fn open(&self, link: &str) -> std::io::Result<()>;
}

/// Opens links in the user's default browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserOpener;

impl LinkOpener for BrowserOpener {
    fn open(&self, link: &str) -> std::io::Result<()> {
        webbrowser::open(link)
    }
}

/// Leaves links alone, for `--no-open` and headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopOpener;

impl LinkOpener for NoopOpener {
    fn open(&self, _link: &str) -> std::io::Result<()> {
        Ok(())
    }
}
