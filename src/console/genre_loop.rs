/// The reply to "add another genre?" that ends the genre loop.
///
/// The default is the literal `n`, compared case-sensitively: `N`, `no` and an
/// empty line all keep the loop going. Nothing is trimmed before comparing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopAnswer {
    text: String,
    case_sensitive: bool,
}

impl StopAnswer {
    /// Stop only on exactly `text`.
    pub fn exact(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            case_sensitive: true,
        }
    }

    /// Stop on `text` in any letter case.
    pub fn ignoring_case(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            case_sensitive: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn matches(&self, answer: &str) -> bool {
        if self.case_sensitive {
            answer == self.text
        } else {
            answer.to_lowercase() == self.text.to_lowercase()
        }
    }
}

impl Default for StopAnswer {
    fn default() -> Self {
        Self::exact("n")
    }
}

/// State of the genre collection loop inside "add movie".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenreLoop {
    Collecting,
    Done,
}

impl GenreLoop {
    pub fn start() -> Self {
        GenreLoop::Collecting
    }

    /// Feed the answer to "add another genre?". `Done` is absorbing.
    pub fn after_answer(self, answer: &str, stop: &StopAnswer) -> Self {
        match self {
            GenreLoop::Collecting if stop.matches(answer) => GenreLoop::Done,
            GenreLoop::Collecting => GenreLoop::Collecting,
            GenreLoop::Done => GenreLoop::Done,
        }
    }

    pub fn is_done(self) -> bool {
        self == GenreLoop::Done
    }
}
