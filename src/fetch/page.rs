/// A fetched response body, kept only long enough to be reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub url: String,
    pub body: String,
}

impl FetchedPage {
    pub fn new(url: impl Into<String>, body: String) -> Self {
        Self {
            url: url.into(),
            body,
        }
    }

    /// Length of the decoded body in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.body.chars().count()
    }

    pub fn sequential_line(&self) -> String {
        format!("Fetched {} characters from {}", self.char_len(), self.url)
    }

    /// The concurrent report leaves the URL out.
    pub fn concurrent_line(&self) -> String {
        format!("Fetched {} characters", self.char_len())
    }
}
