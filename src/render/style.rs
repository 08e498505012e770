const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// ANSI colors used by the renderers. A disabled palette renders plain text.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }

    /// File headers and hunk markers
    pub fn accent(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }

    pub fn removed(&self, text: &str) -> String {
        self.paint(RED, text)
    }

    pub fn added(&self, text: &str) -> String {
        self.paint(GREEN, text)
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }
}
