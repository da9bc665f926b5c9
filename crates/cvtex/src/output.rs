//! Styled status lines on stderr.

use std::path::Path;

use console::{Style, Term};

pub(crate) struct Output {
    term: Term,
    ok: Style,
    warn: Style,
    fail: Style,
    path: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            ok: Style::new().green(),
            warn: Style::new().yellow(),
            fail: Style::new().red(),
            path: Style::new().cyan().bold(),
        }
    }

    pub(crate) fn success(&self, msg: &str) {
        self.line(&self.ok, msg);
    }

    pub(crate) fn warning(&self, msg: &str) {
        self.line(&self.warn, msg);
    }

    pub(crate) fn error(&self, msg: &str) {
        self.line(&self.fail, msg);
    }

    /// `label: <path>` with the path highlighted, e.g. `PDF: output/CV_Doe_Jane_Engineer.pdf`.
    pub(crate) fn artifact(&self, label: &str, path: &Path) {
        let shown = self.path.apply_to(path.display());
        let _ = self.term.write_line(&format!("{label}: {shown}"));
    }

    fn line(&self, style: &Style, msg: &str) {
        let _ = self.term.write_line(&style.apply_to(msg).to_string());
    }
}
